//! Static conjugation tables.
//!
//! Each paradigm stores one suffix code per tense×person cell, relative to
//! the infinitive. Codes strip trailing characters, so verbs derived by
//! prefixation (*revenir*, *comprendre*, *refaire*) share the paradigm of
//! their base verb. An empty cell means the form does not exist.

use std::collections::HashMap;

use lazy_static::lazy_static;
use maplit::hashmap;

use super::{Auxiliary, Group, Pronominal, VerbClass};

pub(crate) struct ParadigmData {
    pub name: &'static str,
    /// Present participle.
    pub ppres: &'static str,
    /// Past participles: masc sing, masc plur, fem sing, fem plur.
    pub ppast: [&'static str; 4],
    /// 1s, 1s-interrogative, 2s, 3s, 1p, 2p, 3p.
    pub present: [&'static str; 7],
    /// 1s, 2s, 3s, 1p, 2p, 3p.
    pub imperfect: [&'static str; 6],
    pub simple_past: [&'static str; 6],
    pub future: [&'static str; 6],
    pub conditional: [&'static str; 6],
    /// 1s, 1s-interrogative, 2s, 3s, 1p, 2p, 3p.
    pub subj_present: [&'static str; 7],
    pub subj_imperfect: [&'static str; 6],
    /// 2s, 1p, 2p.
    pub imperative: [&'static str; 3],
}

pub(crate) static PARADIGMS: &[ParadigmData] = &[
    ParadigmData {
        name: "être",
        ppres: "4étant",
        ppast: ["4été", "", "", ""],
        present: ["4suis", "", "4es", "4est", "4sommes", "4êtes", "4sont"],
        imperfect: ["4étais", "4étais", "4était", "4étions", "4étiez", "4étaient"],
        simple_past: ["4fus", "4fus", "4fut", "4fûmes", "4fûtes", "4furent"],
        future: ["4serai", "4seras", "4sera", "4serons", "4serez", "4seront"],
        conditional: [
            "4serais", "4serais", "4serait", "4serions", "4seriez", "4seraient",
        ],
        subj_present: ["4sois", "", "4sois", "4soit", "4soyons", "4soyez", "4soient"],
        subj_imperfect: ["4fusse", "4fusses", "4fût", "4fussions", "4fussiez", "4fussent"],
        imperative: ["4sois", "4soyons", "4soyez"],
    },
    ParadigmData {
        name: "avoir",
        ppres: "5ayant",
        ppast: ["5eu", "5eus", "5eue", "5eues"],
        present: ["5ai", "", "5as", "5a", "5avons", "5avez", "5ont"],
        imperfect: ["5avais", "5avais", "5avait", "5avions", "5aviez", "5avaient"],
        simple_past: ["5eus", "5eus", "5eut", "5eûmes", "5eûtes", "5eurent"],
        future: ["5aurai", "5auras", "5aura", "5aurons", "5aurez", "5auront"],
        conditional: [
            "5aurais", "5aurais", "5aurait", "5aurions", "5auriez", "5auraient",
        ],
        subj_present: ["5aie", "", "5aies", "5ait", "5ayons", "5ayez", "5aient"],
        subj_imperfect: ["5eusse", "5eusses", "5eût", "5eussions", "5eussiez", "5eussent"],
        imperative: ["5aie", "5ayons", "5ayez"],
    },
    ParadigmData {
        name: "parler",
        ppres: "2ant",
        ppast: ["2é", "2és", "2ée", "2ées"],
        present: ["2e", "2é", "2es", "2e", "2ons", "2ez", "2ent"],
        imperfect: ["2ais", "2ais", "2ait", "2ions", "2iez", "2aient"],
        simple_past: ["2ai", "2as", "2a", "2âmes", "2âtes", "2èrent"],
        future: ["0ai", "0as", "0a", "0ons", "0ez", "0ont"],
        conditional: ["0ais", "0ais", "0ait", "0ions", "0iez", "0aient"],
        subj_present: ["2e", "", "2es", "2e", "2ions", "2iez", "2ent"],
        subj_imperfect: ["2asse", "2asses", "2ât", "2assions", "2assiez", "2assent"],
        imperative: ["2e", "2ons", "2ez"],
    },
    ParadigmData {
        name: "manger",
        ppres: "2eant",
        ppast: ["2é", "2és", "2ée", "2ées"],
        present: ["2e", "2é", "2es", "2e", "2eons", "2ez", "2ent"],
        imperfect: ["2eais", "2eais", "2eait", "2ions", "2iez", "2eaient"],
        simple_past: ["2eai", "2eas", "2ea", "2eâmes", "2eâtes", "2èrent"],
        future: ["0ai", "0as", "0a", "0ons", "0ez", "0ont"],
        conditional: ["0ais", "0ais", "0ait", "0ions", "0iez", "0aient"],
        subj_present: ["2e", "", "2es", "2e", "2ions", "2iez", "2ent"],
        subj_imperfect: [
            "2easse", "2easses", "2eât", "2eassions", "2eassiez", "2eassent",
        ],
        imperative: ["2e", "2eons", "2ez"],
    },
    ParadigmData {
        name: "placer",
        ppres: "3çant",
        ppast: ["2é", "2és", "2ée", "2ées"],
        present: ["2e", "2é", "2es", "2e", "3çons", "2ez", "2ent"],
        imperfect: ["3çais", "3çais", "3çait", "2ions", "2iez", "3çaient"],
        simple_past: ["3çai", "3ças", "3ça", "3çâmes", "3çâtes", "2èrent"],
        future: ["0ai", "0as", "0a", "0ons", "0ez", "0ont"],
        conditional: ["0ais", "0ais", "0ait", "0ions", "0iez", "0aient"],
        subj_present: ["2e", "", "2es", "2e", "2ions", "2iez", "2ent"],
        subj_imperfect: ["3çasse", "3çasses", "3çât", "3çassions", "3çassiez", "3çassent"],
        imperative: ["2e", "3çons", "2ez"],
    },
    ParadigmData {
        name: "finir",
        ppres: "1ssant",
        ppast: ["1", "1s", "1e", "1es"],
        present: ["1s", "", "1s", "1t", "1ssons", "1ssez", "1ssent"],
        imperfect: ["1ssais", "1ssais", "1ssait", "1ssions", "1ssiez", "1ssaient"],
        simple_past: ["1s", "1s", "1t", "2îmes", "2îtes", "1rent"],
        future: ["0ai", "0as", "0a", "0ons", "0ez", "0ont"],
        conditional: ["0ais", "0ais", "0ait", "0ions", "0iez", "0aient"],
        subj_present: ["1sse", "", "1sses", "1sse", "1ssions", "1ssiez", "1ssent"],
        subj_imperfect: ["1sse", "1sses", "2ît", "1ssions", "1ssiez", "1ssent"],
        imperative: ["1s", "1ssons", "1ssez"],
    },
    ParadigmData {
        name: "aller",
        ppres: "2ant",
        ppast: ["2é", "2és", "2ée", "2ées"],
        present: ["5vais", "", "5vas", "5va", "2ons", "2ez", "5vont"],
        imperfect: ["2ais", "2ais", "2ait", "2ions", "2iez", "2aient"],
        simple_past: ["2ai", "2as", "2a", "2âmes", "2âtes", "2èrent"],
        future: ["5irai", "5iras", "5ira", "5irons", "5irez", "5iront"],
        conditional: ["5irais", "5irais", "5irait", "5irions", "5iriez", "5iraient"],
        subj_present: ["5aille", "", "5ailles", "5aille", "2ions", "2iez", "5aillent"],
        subj_imperfect: ["2asse", "2asses", "2ât", "2assions", "2assiez", "2assent"],
        imperative: ["5va", "2ons", "2ez"],
    },
    ParadigmData {
        name: "faire",
        ppres: "4aisant",
        ppast: ["4ait", "4aits", "4aite", "4aites"],
        present: ["4ais", "", "4ais", "4ait", "4aisons", "5faites", "5font"],
        imperfect: [
            "4aisais", "4aisais", "4aisait", "4aisions", "4aisiez", "4aisaient",
        ],
        simple_past: ["4is", "4is", "4it", "4îmes", "4îtes", "4irent"],
        future: ["4erai", "4eras", "4era", "4erons", "4erez", "4eront"],
        conditional: ["4erais", "4erais", "4erait", "4erions", "4eriez", "4eraient"],
        subj_present: ["4asse", "", "4asses", "4asse", "4assions", "4assiez", "4assent"],
        subj_imperfect: ["4isse", "4isses", "4ît", "4issions", "4issiez", "4issent"],
        imperative: ["4ais", "4aisons", "5faites"],
    },
    ParadigmData {
        name: "venir",
        ppres: "2ant",
        ppast: ["2u", "2us", "2ue", "2ues"],
        present: ["4iens", "", "4iens", "4ient", "2ons", "2ez", "4iennent"],
        imperfect: ["2ais", "2ais", "2ait", "2ions", "2iez", "2aient"],
        simple_past: ["4ins", "4ins", "4int", "4înmes", "4întes", "4inrent"],
        future: [
            "4iendrai", "4iendras", "4iendra", "4iendrons", "4iendrez", "4iendront",
        ],
        conditional: [
            "4iendrais",
            "4iendrais",
            "4iendrait",
            "4iendrions",
            "4iendriez",
            "4iendraient",
        ],
        subj_present: ["4ienne", "", "4iennes", "4ienne", "2ions", "2iez", "4iennent"],
        subj_imperfect: ["4insse", "4insses", "4înt", "4inssions", "4inssiez", "4inssent"],
        imperative: ["4iens", "2ons", "2ez"],
    },
    ParadigmData {
        name: "prendre",
        ppres: "3ant",
        ppast: ["5is", "5is", "5ise", "5ises"],
        present: ["5ends", "", "5ends", "5end", "3ons", "3ez", "5ennent"],
        imperfect: ["3ais", "3ais", "3ait", "3ions", "3iez", "3aient"],
        simple_past: ["5is", "5is", "5it", "5îmes", "5îtes", "5irent"],
        future: ["1ai", "1as", "1a", "1ons", "1ez", "1ont"],
        conditional: ["1ais", "1ais", "1ait", "1ions", "1iez", "1aient"],
        subj_present: ["5enne", "", "5ennes", "5enne", "3ions", "3iez", "5ennent"],
        subj_imperfect: ["5isse", "5isses", "5ît", "5issions", "5issiez", "5issent"],
        imperative: ["5ends", "3ons", "3ez"],
    },
    ParadigmData {
        name: "mettre",
        ppres: "2ant",
        ppast: ["5is", "5is", "5ise", "5ises"],
        present: ["3s", "", "3s", "3", "2ons", "2ez", "2ent"],
        imperfect: ["2ais", "2ais", "2ait", "2ions", "2iez", "2aient"],
        simple_past: ["5is", "5is", "5it", "5îmes", "5îtes", "5irent"],
        future: ["1ai", "1as", "1a", "1ons", "1ez", "1ont"],
        conditional: ["1ais", "1ais", "1ait", "1ions", "1iez", "1aient"],
        subj_present: ["2e", "", "2es", "2e", "2ions", "2iez", "2ent"],
        subj_imperfect: ["5isse", "5isses", "5ît", "5issions", "5issiez", "5issent"],
        imperative: ["3s", "2ons", "2ez"],
    },
    ParadigmData {
        name: "dire",
        ppres: "2sant",
        ppast: ["2t", "2ts", "2te", "2tes"],
        present: ["2s", "", "2s", "2t", "2sons", "4dites", "2sent"],
        imperfect: ["2sais", "2sais", "2sait", "2sions", "2siez", "2saient"],
        simple_past: ["2s", "2s", "2t", "3îmes", "3îtes", "2rent"],
        future: ["1ai", "1as", "1a", "1ons", "1ez", "1ont"],
        conditional: ["1ais", "1ais", "1ait", "1ions", "1iez", "1aient"],
        subj_present: ["2se", "", "2ses", "2se", "2sions", "2siez", "2sent"],
        subj_imperfect: ["2sse", "2sses", "3ît", "2ssions", "2ssiez", "2ssent"],
        imperative: ["2s", "2sons", "4dites"],
    },
    ParadigmData {
        name: "voir",
        ppres: "2yant",
        ppast: ["3u", "3us", "3ue", "3ues"],
        present: ["2is", "", "2is", "2it", "2yons", "2yez", "2ient"],
        imperfect: ["2yais", "2yais", "2yait", "2yions", "2yiez", "2yaient"],
        simple_past: ["3is", "3is", "3it", "3îmes", "3îtes", "3irent"],
        future: ["3errai", "3erras", "3erra", "3errons", "3errez", "3erront"],
        conditional: [
            "3errais", "3errais", "3errait", "3errions", "3erriez", "3erraient",
        ],
        subj_present: ["2ie", "", "2ies", "2ie", "2yions", "2yiez", "2ient"],
        subj_imperfect: ["3isse", "3isses", "3ît", "3issions", "3issiez", "3issent"],
        imperative: ["2is", "2yons", "2yez"],
    },
    ParadigmData {
        name: "devoir",
        ppres: "3ant",
        ppast: ["5û", "5us", "5ue", "5ues"],
        present: ["5ois", "", "5ois", "5oit", "3ons", "3ez", "5oivent"],
        imperfect: ["3ais", "3ais", "3ait", "3ions", "3iez", "3aient"],
        simple_past: ["5us", "5us", "5ut", "5ûmes", "5ûtes", "5urent"],
        future: ["3rai", "3ras", "3ra", "3rons", "3rez", "3ront"],
        conditional: ["3rais", "3rais", "3rait", "3rions", "3riez", "3raient"],
        subj_present: ["5oive", "", "5oives", "5oive", "3ions", "3iez", "5oivent"],
        subj_imperfect: ["5usse", "5usses", "5ût", "5ussions", "5ussiez", "5ussent"],
        imperative: ["5ois", "3ons", "3ez"],
    },
    ParadigmData {
        name: "savoir",
        ppres: "4chant",
        ppast: ["5u", "5us", "5ue", "5ues"],
        present: ["4is", "", "4is", "4it", "3ons", "3ez", "3ent"],
        imperfect: ["3ais", "3ais", "3ait", "3ions", "3iez", "3aient"],
        simple_past: ["5us", "5us", "5ut", "5ûmes", "5ûtes", "5urent"],
        future: ["4urai", "4uras", "4ura", "4urons", "4urez", "4uront"],
        conditional: ["4urais", "4urais", "4urait", "4urions", "4uriez", "4uraient"],
        subj_present: ["4che", "", "4ches", "4che", "4chions", "4chiez", "4chent"],
        subj_imperfect: ["5usse", "5usses", "5ût", "5ussions", "5ussiez", "5ussent"],
        imperative: ["4che", "4chons", "4chez"],
    },
    ParadigmData {
        name: "pouvoir",
        ppres: "3ant",
        ppast: ["6u", "", "", ""],
        present: ["6eux", "7puis", "6eux", "6eut", "3ons", "3ez", "6euvent"],
        imperfect: ["3ais", "3ais", "3ait", "3ions", "3iez", "3aient"],
        simple_past: ["6us", "6us", "6ut", "6ûmes", "6ûtes", "6urent"],
        future: ["4rrai", "4rras", "4rra", "4rrons", "4rrez", "4rront"],
        conditional: ["4rrais", "4rrais", "4rrait", "4rrions", "4rriez", "4rraient"],
        subj_present: [
            "6uisse", "", "6uisses", "6uisse", "6uissions", "6uissiez", "6uissent",
        ],
        subj_imperfect: ["6usse", "6usses", "6ût", "6ussions", "6ussiez", "6ussent"],
        imperative: ["", "", ""],
    },
    ParadigmData {
        name: "vouloir",
        ppres: "3ant",
        ppast: ["3u", "3us", "3ue", "3ues"],
        present: ["6eux", "", "6eux", "6eut", "3ons", "3ez", "6eulent"],
        imperfect: ["3ais", "3ais", "3ait", "3ions", "3iez", "3aient"],
        simple_past: ["3us", "3us", "3ut", "3ûmes", "3ûtes", "3urent"],
        future: ["4drai", "4dras", "4dra", "4drons", "4drez", "4dront"],
        conditional: ["4drais", "4drais", "4drait", "4drions", "4driez", "4draient"],
        subj_present: [
            "6euille", "", "6euilles", "6euille", "3ions", "3iez", "6euillent",
        ],
        subj_imperfect: ["3usse", "3usses", "3ût", "3ussions", "3ussiez", "3ussent"],
        imperative: ["6euille", "6euillons", "6euillez"],
    },
    ParadigmData {
        name: "pleuvoir",
        ppres: "3ant",
        ppast: ["6u", "", "", ""],
        present: ["", "", "", "4t", "", "", "3ent"],
        imperfect: ["", "", "3ait", "", "", "3aient"],
        simple_past: ["", "", "6ut", "", "", "6urent"],
        future: ["", "", "3ra", "", "", "3ront"],
        conditional: ["", "", "3rait", "", "", "3raient"],
        subj_present: ["", "", "", "3e", "", "", "3ent"],
        subj_imperfect: ["", "", "6ût", "", "", "6ussent"],
        imperative: ["", "", ""],
    },
];

const CL_ETRE: VerbClass = VerbClass {
    group: Group::Auxiliary,
    aux: Auxiliary::Avoir,
    pronominal: Pronominal::Never,
    transitive_direct: false,
    transitive_indirect: false,
    intransitive: true,
    impersonal: false,
    defective: false,
};

const CL_AVOIR: VerbClass = VerbClass {
    group: Group::Auxiliary,
    aux: Auxiliary::Avoir,
    pronominal: Pronominal::Never,
    transitive_direct: true,
    transitive_indirect: false,
    intransitive: false,
    impersonal: false,
    defective: false,
};

const CL_FIRST_TRANS: VerbClass = VerbClass {
    group: Group::First,
    aux: Auxiliary::Avoir,
    pronominal: Pronominal::Optional,
    transitive_direct: true,
    transitive_indirect: false,
    intransitive: true,
    impersonal: false,
    defective: false,
};

const CL_FIRST_INTRANS: VerbClass = VerbClass {
    group: Group::First,
    aux: Auxiliary::Avoir,
    pronominal: Pronominal::Never,
    transitive_direct: false,
    transitive_indirect: false,
    intransitive: true,
    impersonal: false,
    defective: false,
};

const CL_FIRST_INTRANS_ETRE: VerbClass = VerbClass {
    group: Group::First,
    aux: Auxiliary::Etre,
    pronominal: Pronominal::Never,
    transitive_direct: false,
    transitive_indirect: false,
    intransitive: true,
    impersonal: false,
    defective: false,
};

const CL_FIRST_PRONOMINAL: VerbClass = VerbClass {
    group: Group::First,
    aux: Auxiliary::Etre,
    pronominal: Pronominal::Obligatory,
    transitive_direct: false,
    transitive_indirect: false,
    intransitive: false,
    impersonal: false,
    defective: false,
};

const CL_FIRST_RECIPROCAL: VerbClass = VerbClass {
    group: Group::First,
    aux: Auxiliary::Etre,
    pronominal: Pronominal::Reciprocal,
    transitive_direct: false,
    transitive_indirect: false,
    intransitive: false,
    impersonal: false,
    defective: false,
};

const CL_SECOND_TRANS: VerbClass = VerbClass {
    group: Group::Second,
    aux: Auxiliary::Avoir,
    pronominal: Pronominal::Optional,
    transitive_direct: true,
    transitive_indirect: false,
    intransitive: true,
    impersonal: false,
    defective: false,
};

const CL_ALLER: VerbClass = VerbClass {
    group: Group::Third,
    aux: Auxiliary::Etre,
    pronominal: Pronominal::OptionalEn,
    transitive_direct: false,
    transitive_indirect: false,
    intransitive: true,
    impersonal: false,
    defective: false,
};

const CL_THIRD_TRANS: VerbClass = VerbClass {
    group: Group::Third,
    aux: Auxiliary::Avoir,
    pronominal: Pronominal::Optional,
    transitive_direct: true,
    transitive_indirect: false,
    intransitive: false,
    impersonal: false,
    defective: false,
};

const CL_VENIR: VerbClass = VerbClass {
    group: Group::Third,
    aux: Auxiliary::Etre,
    pronominal: Pronominal::Never,
    transitive_direct: false,
    transitive_indirect: true,
    intransitive: true,
    impersonal: false,
    defective: false,
};

const CL_SOUVENIR: VerbClass = VerbClass {
    group: Group::Third,
    aux: Auxiliary::Etre,
    pronominal: Pronominal::Obligatory,
    transitive_direct: false,
    transitive_indirect: true,
    intransitive: false,
    impersonal: false,
    defective: false,
};

const CL_PLEUVOIR: VerbClass = VerbClass {
    group: Group::Third,
    aux: Auxiliary::Avoir,
    pronominal: Pronominal::Never,
    transitive_direct: false,
    transitive_indirect: false,
    intransitive: true,
    impersonal: true,
    defective: true,
};

/// Lemma → (paradigm name, verb class).
static VERBS: &[(&str, &str, &VerbClass)] = &[
    ("être", "être", &CL_ETRE),
    ("avoir", "avoir", &CL_AVOIR),
    // 1st group, regular.
    ("aimer", "parler", &CL_FIRST_TRANS),
    ("chanter", "parler", &CL_FIRST_TRANS),
    ("demander", "parler", &CL_FIRST_TRANS),
    ("donner", "parler", &CL_FIRST_TRANS),
    ("écouter", "parler", &CL_FIRST_TRANS),
    ("étudier", "parler", &CL_FIRST_TRANS),
    ("habiller", "parler", &CL_FIRST_TRANS),
    ("jouer", "parler", &CL_FIRST_TRANS),
    ("laver", "parler", &CL_FIRST_TRANS),
    ("marcher", "parler", &CL_FIRST_INTRANS),
    ("oublier", "parler", &CL_FIRST_TRANS),
    ("parler", "parler", &CL_FIRST_TRANS),
    ("penser", "parler", &CL_FIRST_TRANS),
    ("porter", "parler", &CL_FIRST_TRANS),
    ("regarder", "parler", &CL_FIRST_TRANS),
    ("sembler", "parler", &CL_FIRST_INTRANS),
    ("travailler", "parler", &CL_FIRST_INTRANS),
    ("trouver", "parler", &CL_FIRST_TRANS),
    // 1st group, auxiliary être.
    ("arriver", "parler", &CL_FIRST_INTRANS_ETRE),
    ("entrer", "parler", &CL_FIRST_INTRANS_ETRE),
    ("monter", "parler", &CL_FIRST_INTRANS_ETRE),
    ("passer", "parler", &CL_FIRST_INTRANS_ETRE),
    ("rentrer", "parler", &CL_FIRST_INTRANS_ETRE),
    ("rester", "parler", &CL_FIRST_INTRANS_ETRE),
    ("retourner", "parler", &CL_FIRST_INTRANS_ETRE),
    ("tomber", "parler", &CL_FIRST_INTRANS_ETRE),
    // 1st group, pronominal.
    ("envoler", "parler", &CL_FIRST_PRONOMINAL),
    ("méfier", "parler", &CL_FIRST_PRONOMINAL),
    ("entraider", "parler", &CL_FIRST_RECIPROCAL),
    // 1st group, orthographic subtypes.
    ("bouger", "manger", &CL_FIRST_TRANS),
    ("changer", "manger", &CL_FIRST_TRANS),
    ("charger", "manger", &CL_FIRST_TRANS),
    ("juger", "manger", &CL_FIRST_TRANS),
    ("manger", "manger", &CL_FIRST_TRANS),
    ("nager", "manger", &CL_FIRST_INTRANS),
    ("partager", "manger", &CL_FIRST_TRANS),
    ("ranger", "manger", &CL_FIRST_TRANS),
    ("voyager", "manger", &CL_FIRST_INTRANS),
    ("avancer", "placer", &CL_FIRST_TRANS),
    ("commencer", "placer", &CL_FIRST_TRANS),
    ("lancer", "placer", &CL_FIRST_TRANS),
    ("placer", "placer", &CL_FIRST_TRANS),
    ("prononcer", "placer", &CL_FIRST_TRANS),
    ("remplacer", "placer", &CL_FIRST_TRANS),
    // 2nd group.
    ("agir", "finir", &CL_SECOND_TRANS),
    ("choisir", "finir", &CL_SECOND_TRANS),
    ("finir", "finir", &CL_SECOND_TRANS),
    ("grandir", "finir", &CL_SECOND_TRANS),
    ("guérir", "finir", &CL_SECOND_TRANS),
    ("obéir", "finir", &CL_SECOND_TRANS),
    ("réfléchir", "finir", &CL_SECOND_TRANS),
    ("remplir", "finir", &CL_SECOND_TRANS),
    ("réussir", "finir", &CL_SECOND_TRANS),
    ("rougir", "finir", &CL_SECOND_TRANS),
    // 3rd group.
    ("aller", "aller", &CL_ALLER),
    ("défaire", "faire", &CL_THIRD_TRANS),
    ("faire", "faire", &CL_THIRD_TRANS),
    ("refaire", "faire", &CL_THIRD_TRANS),
    ("devenir", "venir", &CL_VENIR),
    ("revenir", "venir", &CL_VENIR),
    ("souvenir", "venir", &CL_SOUVENIR),
    ("venir", "venir", &CL_VENIR),
    ("obtenir", "venir", &CL_THIRD_TRANS),
    ("retenir", "venir", &CL_THIRD_TRANS),
    ("tenir", "venir", &CL_THIRD_TRANS),
    ("apprendre", "prendre", &CL_THIRD_TRANS),
    ("comprendre", "prendre", &CL_THIRD_TRANS),
    ("prendre", "prendre", &CL_THIRD_TRANS),
    ("reprendre", "prendre", &CL_THIRD_TRANS),
    ("mettre", "mettre", &CL_THIRD_TRANS),
    ("permettre", "mettre", &CL_THIRD_TRANS),
    ("promettre", "mettre", &CL_THIRD_TRANS),
    ("remettre", "mettre", &CL_THIRD_TRANS),
    ("dire", "dire", &CL_THIRD_TRANS),
    ("redire", "dire", &CL_THIRD_TRANS),
    ("revoir", "voir", &CL_THIRD_TRANS),
    ("voir", "voir", &CL_THIRD_TRANS),
    ("devoir", "devoir", &CL_THIRD_TRANS),
    ("savoir", "savoir", &CL_THIRD_TRANS),
    ("pouvoir", "pouvoir", &CL_THIRD_TRANS),
    ("vouloir", "vouloir", &CL_THIRD_TRANS),
    ("pleuvoir", "pleuvoir", &CL_PLEUVOIR),
];

lazy_static! {
    static ref PARADIGM_INDEX: HashMap<&'static str, &'static ParadigmData> =
        PARADIGMS.iter().map(|p| (p.name, p)).collect();
    static ref VERB_INDEX: HashMap<&'static str, (&'static ParadigmData, &'static VerbClass)> =
        VERBS
            .iter()
            .map(|(lemma, paradigm, class)| {
                let data = PARADIGM_INDEX
                    .get(paradigm)
                    .unwrap_or_else(|| panic!("verb '{}' names unknown paradigm '{}'", lemma, paradigm));
                (*lemma, (*data, *class))
            })
            .collect();
    /// Nouns commonly derived from a verb, suggested in substantive contexts.
    static ref VERB_NOUN_INDEX: HashMap<&'static str, Vec<&'static str>> = hashmap! {
        "aller" => vec!["allée"],
        "arriver" => vec!["arrivée"],
        "chanter" => vec!["chant", "chanteur", "chanteuse"],
        "choisir" => vec!["choix"],
        "commencer" => vec!["commencement"],
        "devoir" => vec!["devoir"],
        "dire" => vec!["dire"],
        "finir" => vec!["fin"],
        "jouer" => vec!["jeu", "joueur", "joueuse"],
        "pouvoir" => vec!["pouvoir"],
        "savoir" => vec!["savoir"],
        "travailler" => vec!["travail", "travailleur", "travailleuse"],
        "voir" => vec!["vue"],
    };
}

pub(crate) fn lookup(lemma: &str) -> Option<(&'static ParadigmData, &'static VerbClass)> {
    VERB_INDEX.get(lemma).copied()
}

pub(crate) fn derived_nouns(lemma: &str) -> Option<&'static [&'static str]> {
    VERB_NOUN_INDEX.get(lemma).map(|nouns| nouns.as_slice())
}

pub(crate) fn known_lemmas() -> impl Iterator<Item = &'static str> {
    VERBS.iter().map(|(lemma, _, _)| *lemma)
}
