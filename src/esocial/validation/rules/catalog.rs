//! Cross-field rules registered per event type.

use super::{Condition, CrossFieldRule};
use crate::esocial::domain::EventType;

const PERIODIC_EVENTS: &[&str] = &["S-1200", "S-1202", "S-1207", "S-1210"];
const WORKER_EVENTS: &[&str] = &[
    "S-2200", "S-2205", "S-2206", "S-2210", "S-2220", "S-2230", "S-2240", "S-2250", "S-2299",
    "S-2300", "S-2399", "S-2400",
];

const fn order(scope: &'static str, start: &'static str, end: &'static str) -> CrossFieldRule {
    CrossFieldRule::DateOrder { scope, start, end }
}

const fn not_future(scope: &'static str, field: &'static str) -> CrossFieldRule {
    CrossFieldRule::NotInFuture { scope, field }
}

const fn required_when(
    scope: &'static str,
    discriminator: &'static str,
    condition: Condition,
    dependent: &'static str,
) -> CrossFieldRule {
    CrossFieldRule::RequiredWhen {
        scope,
        discriminator,
        condition,
        dependent,
    }
}

const S1000: &[CrossFieldRule] = &[
    required_when("infoCadastro", "indEtt", Condition::Equals("S"), "nrRegEtt"),
    required_when("dadosIsencao", "dtProtRenov", Condition::Present, "nrProtRenov"),
    required_when("infoOP.infoEnte", "subteto", Condition::Equals("S"), "subtetoDec"),
    order("ideEmpregador", "iniValid", "fimValid"),
    order("dadosIsencao", "dtEmisCertif", "dtVencCertif"),
    not_future("dadosIsencao", "dtEmisCertif"),
];

const S1200: &[CrossFieldRule] = &[not_future("", "competencia")];

const S1202: &[CrossFieldRule] = &[
    CrossFieldRule::UniqueWithin {
        list: "dmDev",
        key: "ideDmDev",
    },
    not_future("ideEvento", "perApur"),
];

const BENEFIT: &[CrossFieldRule] = &[
    required_when("", "dataFimBeneficio", Condition::Present, "motivoFimBeneficio"),
    order("", "dataInicioBeneficio", "dataFimBeneficio"),
];

const S1210: &[CrossFieldRule] = &[
    not_future("ideEvento", "perApur"),
    not_future("infoPgto[]", "perRef"),
];

const S2200: &[CrossFieldRule] = &[
    required_when("", "carteiraTrabalho", Condition::Present, "serieCarteiraTrabalho"),
    required_when("", "carteiraTrabalho", Condition::Present, "ufCarteiraTrabalho"),
    not_future("", "dataNascimento"),
    order("", "dataNascimento", "dataAdmissao"),
];

const S2205: &[CrossFieldRule] = &[
    required_when("", "carteiraTrabalho", Condition::Present, "serieCarteiraTrabalho"),
    required_when("", "carteiraTrabalho", Condition::Present, "ufCarteiraTrabalho"),
    not_future("", "dataNascimento"),
    order("", "dataNascimento", "dataAlteracao"),
];

const S2206: &[CrossFieldRule] = &[];

const S2210: &[CrossFieldRule] = &[
    required_when("atestadoMedico", "dataAfastamento", Condition::Present, "diasAfastamento"),
    not_future("", "dataAcidente"),
    order("", "dataAcidente", "atestadoMedico.dataEmissao"),
    order("", "dataAcidente", "atestadoMedico.dataAfastamento"),
];

const S2220: &[CrossFieldRule] = &[
    required_when("", "resultadoExame", Condition::Equals("R"), "restricoes"),
    not_future("", "dataExame"),
    order("", "dataExame", "aso.dataEmissao"),
];

const S2230: &[CrossFieldRule] = &[
    required_when("acidenteTrabalho", "ocorreu", Condition::Flag(true), "numeroCat"),
    required_when("acidenteTrabalho", "ocorreu", Condition::Flag(true), "dataEmissaoCat"),
    required_when("acidenteTrabalho", "ocorreu", Condition::Flag(true), "dataAcidente"),
    order("", "dataInicioAfastamento", "dataFimAfastamento"),
    order("acidenteTrabalho", "dataAcidente", "dataEmissaoCat"),
    not_future("atestadoMedico", "dataEmissao"),
];

const S2240: &[CrossFieldRule] = &[
    not_future("", "dataInicioCondicao"),
    not_future("", "dataFimCondicao"),
    order("", "dataInicioCondicao", "dataFimCondicao"),
    not_future("agenteRisco[]", "dataMedicao"),
    CrossFieldRule::NotInPast {
        scope: "epi[]",
        field: "dataValidade",
    },
];

const S2250: &[CrossFieldRule] = &[
    required_when("", "tipoAviso", Condition::Equals("2"), "indenizacao"),
    not_future("", "dataAviso"),
    order("", "dataAviso", "dataInicioAviso"),
    order("", "dataInicioAviso", "dataFimAviso"),
    order("", "dataAviso", "dataDesligamento"),
];

const S2299: &[CrossFieldRule] = &[
    required_when("", "indPagtoAPI", Condition::Equals("S"), "dtProjFimAPI"),
    order("", "dataDesligamento", "dtProjFimAPI"),
];

const S2300: &[CrossFieldRule] = &[
    not_future("", "dataNascimento"),
    order("", "dataNascimento", "dataInicio"),
    order("", "dataInicio", "dataFim"),
];

const S2399: &[CrossFieldRule] = &[order("", "dataInicio", "dataTermino")];

const S2400: &[CrossFieldRule] = &[
    required_when("", "dataFimBeneficio", Condition::Present, "motivoFimBeneficio"),
    not_future("", "dataNascimento"),
    order("", "dataInicioBeneficio", "dataFimBeneficio"),
];

const S3000: &[CrossFieldRule] = &[
    required_when("", "tpEvento", Condition::OneOf(PERIODIC_EVENTS), "ideFolhaPagto"),
    required_when("", "tpEvento", Condition::OneOf(WORKER_EVENTS), "ideTrabalhador"),
    not_future("ideFolhaPagto", "perApur"),
];

const WORKER_TOTALIZER: &[CrossFieldRule] = &[not_future("", "perApur")];

const S5011: &[CrossFieldRule] = &[
    required_when("infoCS", "indExistInfo", Condition::Equals("1"), "ideEstab"),
    not_future("", "perApur"),
];

const S5012: &[CrossFieldRule] = &[
    required_when("infoIRRF", "indExistInfo", Condition::Equals("1"), "infoCRContrib"),
    not_future("", "perApur"),
];

const S5013: &[CrossFieldRule] = &[
    required_when("infoFGTS", "indExistInfo", Condition::Equals("1"), "ideEstab"),
    not_future("", "perApur"),
];

/// Returns the cross-field rules registered for `event_type`.
///
/// # Examples
///
/// ```
/// use esocial_guard::esocial::domain::EventType;
/// use esocial_guard::esocial::validation::rules::rules_for;
///
/// assert!(rules_for(EventType::S2250).iter().any(|rule| rule.is_conditional()));
/// ```
#[must_use]
pub const fn rules_for(event_type: EventType) -> &'static [CrossFieldRule] {
    match event_type {
        EventType::S1000 => S1000,
        EventType::S1200 => S1200,
        EventType::S1202 => S1202,
        EventType::S1207 => BENEFIT,
        EventType::S1210 => S1210,
        EventType::S2200 => S2200,
        EventType::S2205 => S2205,
        EventType::S2206 => S2206,
        EventType::S2210 => S2210,
        EventType::S2220 => S2220,
        EventType::S2230 => S2230,
        EventType::S2240 => S2240,
        EventType::S2250 => S2250,
        EventType::S2299 => S2299,
        EventType::S2300 => S2300,
        EventType::S2399 => S2399,
        EventType::S2400 => S2400,
        EventType::S3000 => S3000,
        EventType::S5001 | EventType::S5002 | EventType::S5003 => WORKER_TOTALIZER,
        EventType::S5011 => S5011,
        EventType::S5012 => S5012,
        EventType::S5013 => S5013,
    }
}
