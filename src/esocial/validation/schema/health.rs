//! Occupational health and safety events.

use super::shared::{
    CERTIFICATE, CPF, LOCATION, NAMED_LOCATION, OBSERVATION, PHYSICIAN, optional_record,
    required_record, text,
};
use super::{FieldSpec, Presence, RecordSchema};
use crate::esocial::validation::fields::FieldKind;

static BODY_PART: RecordSchema = RecordSchema {
    name: "affected body part",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("codigo", text(20)),
        FieldSpec::required("lateralidade", FieldKind::Code(&["E", "D", "A"])),
    ],
};

static CAUSING_AGENT: RecordSchema = RecordSchema {
    name: "causing agent",
    extends: &[],
    checks: &[],
    fields: &[FieldSpec::required("codigo", text(20))],
};

static ACCIDENT_CERTIFICATE: RecordSchema = RecordSchema {
    name: "accident medical certificate",
    extends: &[&CERTIFICATE],
    checks: &[],
    fields: &[
        FieldSpec::optional("dataAfastamento", FieldKind::Date),
        FieldSpec::optional("diasAfastamento", FieldKind::Integer { min: 0, max: 999 }),
    ],
};

pub(super) static S2210: RecordSchema = RecordSchema {
    name: "S-2210",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("dataAcidente", FieldKind::Date),
        FieldSpec::required("horaAcidente", FieldKind::Time),
        FieldSpec::required("tipoAcidente", text(10)),
        required_record("localAcidente", &LOCATION),
        required_record("parteAtingida", &BODY_PART),
        required_record("agenteCausador", &CAUSING_AGENT),
        optional_record("atestadoMedico", &ACCIDENT_CERTIFICATE),
        OBSERVATION,
    ],
};

static RESTRICTION: RecordSchema = RecordSchema {
    name: "restriction",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("codigo", text(20)),
        FieldSpec::required("descricao", text(500)),
    ],
};

pub(super) static S2220: RecordSchema = RecordSchema {
    name: "S-2220",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("dataExame", FieldKind::Date),
        FieldSpec::required("tipoExame", text(10)),
        FieldSpec::required("resultadoExame", FieldKind::Code(&["A", "I", "R"])),
        required_record("aso", &CERTIFICATE),
        required_record("medico", &PHYSICIAN),
        required_record("localExame", &NAMED_LOCATION),
        optional_record("restricoes", &RESTRICTION),
        OBSERVATION,
    ],
};

static DIAGNOSIS: RecordSchema = RecordSchema {
    name: "diagnosis",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("codigo", FieldKind::Cid),
        FieldSpec::optional("descricao", text(200)),
    ],
};

static LEAVE_CERTIFICATE: RecordSchema = RecordSchema {
    name: "leave medical certificate",
    extends: &[&CERTIFICATE],
    checks: &[],
    fields: &[required_record("medico", &PHYSICIAN)],
};

/// Only `ocorreu` is structural; the remaining fields become required when
/// an accident occurred.
static WORK_ACCIDENT: RecordSchema = RecordSchema {
    name: "work accident",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("ocorreu", FieldKind::Boolean),
        FieldSpec::optional("numeroCat", text(40)),
        FieldSpec::optional("dataAcidente", FieldKind::Date),
        FieldSpec::optional("dataEmissaoCat", FieldKind::Date),
    ],
};

pub(super) static S2230: RecordSchema = RecordSchema {
    name: "S-2230",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("dataInicioAfastamento", FieldKind::Date),
        FieldSpec::optional("dataFimAfastamento", FieldKind::Date),
        FieldSpec::required("codigoMotivoAfastamento", text(10)),
        FieldSpec::optional("motivoAfastamento", text(200)),
        optional_record("cid", &DIAGNOSIS),
        optional_record("atestadoMedico", &LEAVE_CERTIFICATE),
        optional_record("acidenteTrabalho", &WORK_ACCIDENT),
        OBSERVATION,
    ],
};

static RISK_AGENT: RecordSchema = RecordSchema {
    name: "risk agent",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("codigo", text(20)),
        FieldSpec::required("descricao", text(200)),
        FieldSpec::required("intensidade", text(30)),
        FieldSpec::required("unidade", text(20)),
        FieldSpec::required("tecnicaUtilizada", text(100)),
        FieldSpec::required("dataMedicao", FieldKind::Date),
    ],
};

static PROTECTIVE_EQUIPMENT: RecordSchema = RecordSchema {
    name: "protective equipment",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("codigo", text(20)),
        FieldSpec::required("descricao", text(200)),
        FieldSpec::required("ca", text(20)),
        FieldSpec::required("dataValidade", FieldKind::Date),
    ],
};

pub(super) static S2240: RecordSchema = RecordSchema {
    name: "S-2240",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("dataInicioCondicao", FieldKind::Date),
        FieldSpec::optional("dataFimCondicao", FieldKind::Date),
        FieldSpec::required("tipoCondicao", text(60)),
        FieldSpec::required("codigoCondicao", text(20)),
        required_record("localCondicao", &NAMED_LOCATION),
        FieldSpec::list("agenteRisco", Presence::Required, &RISK_AGENT, 1, None),
        FieldSpec::list("epi", Presence::Optional, &PROTECTIVE_EQUIPMENT, 0, None),
        OBSERVATION,
    ],
};
