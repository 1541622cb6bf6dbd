//! Non-periodic events describing the employment relationship.

use super::shared::{
    BENEFIT, CATEGORY, CPF, CURRENCY, INSCRIPTION_TYPES, LOCATION, OBSERVATION, WORKER_IDENTITY,
    YES_NO, optional_record, text,
};
use super::{FieldSpec, RecordSchema};
use crate::esocial::validation::fields::FieldKind;

/// Monetary amounts typed by hand are capped at 999 999,99.
const BOUNDED_AMOUNT: FieldKind = FieldKind::Currency {
    max_cents: Some(99_999_999),
};

static EMPLOYMENT_RECORD: RecordSchema = RecordSchema {
    name: "employment record",
    extends: &[&WORKER_IDENTITY],
    checks: &[],
    fields: &[
        FieldSpec::optional("carteiraTrabalho", text(20)),
        FieldSpec::optional("serieCarteiraTrabalho", text(10)),
        FieldSpec::optional("ufCarteiraTrabalho", FieldKind::StateCode),
        FieldSpec::required("categoriaTrabalhador", CATEGORY),
        FieldSpec::required("tipoInscricao", FieldKind::Code(INSCRIPTION_TYPES)),
        FieldSpec::required("cargo", text(100)),
        FieldSpec::required("salario", CURRENCY),
    ],
};

pub(super) static S2200: RecordSchema = RecordSchema {
    name: "S-2200",
    extends: &[&EMPLOYMENT_RECORD],
    checks: &[],
    fields: &[FieldSpec::required("dataAdmissao", FieldKind::Date)],
};

pub(super) static S2205: RecordSchema = RecordSchema {
    name: "S-2205",
    extends: &[&EMPLOYMENT_RECORD],
    checks: &[],
    fields: &[
        FieldSpec::required("dataAlteracao", FieldKind::Date),
        FieldSpec::required("motivoAlteracao", text(200)),
    ],
};

static WORKING_HOURS: RecordSchema = RecordSchema {
    name: "working hours",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("tipo", text(60)),
        FieldSpec::required("cargaHoraria", FieldKind::Integer { min: 1, max: 220 }),
        FieldSpec::required("horarioInicio", FieldKind::Time),
        FieldSpec::required("horarioFim", FieldKind::Time),
    ],
};

pub(super) static S2206: RecordSchema = RecordSchema {
    name: "S-2206",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("dataAlteracao", FieldKind::Date),
        FieldSpec::required("tipoAlteracao", text(60)),
        FieldSpec::required("motivoAlteracao", text(200)),
        FieldSpec::optional("cargo", text(100)),
        FieldSpec::optional("salario", CURRENCY),
        optional_record("jornadaTrabalho", &WORKING_HOURS),
        optional_record("localTrabalho", &LOCATION),
    ],
};

static INDEMNITY: RecordSchema = RecordSchema {
    name: "indemnity",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("valor", BOUNDED_AMOUNT),
        FieldSpec::required("dataPagamento", FieldKind::Date),
    ],
};

pub(super) static S2250: RecordSchema = RecordSchema {
    name: "S-2250",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("dataAviso", FieldKind::Date),
        FieldSpec::required("dataInicioAviso", FieldKind::Date),
        FieldSpec::required("dataFimAviso", FieldKind::Date),
        FieldSpec::required("tipoAviso", FieldKind::Code(&["1", "2"])),
        FieldSpec::required("codigoMotivoAviso", text(10)),
        FieldSpec::optional("motivoAviso", text(200)),
        FieldSpec::optional("dataDesligamento", FieldKind::Date),
        optional_record("indenizacao", &INDEMNITY),
        OBSERVATION,
    ],
};

pub(super) static S2299: RecordSchema = RecordSchema {
    name: "S-2299",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("dataDesligamento", FieldKind::Date),
        FieldSpec::required("motivoDesligamento", text(10)),
        FieldSpec::optional("indPagtoAPI", FieldKind::Code(YES_NO)),
        FieldSpec::optional("dtProjFimAPI", FieldKind::Date),
        OBSERVATION,
    ],
};

pub(super) static S2300: RecordSchema = RecordSchema {
    name: "S-2300",
    extends: &[&WORKER_IDENTITY],
    checks: &[],
    fields: &[
        FieldSpec::required("sexo", FieldKind::Code(&["M", "F"])),
        FieldSpec::required("tipoTrabalhador", text(10)),
        FieldSpec::required("cargo", text(100)),
        FieldSpec::required("dataInicio", FieldKind::Date),
        FieldSpec::optional("dataFim", FieldKind::Date),
        FieldSpec::required("cargaHoraria", FieldKind::Integer { min: 1, max: 220 }),
        FieldSpec::required("valorHora", CURRENCY),
        OBSERVATION,
    ],
};

pub(super) static S2399: RecordSchema = RecordSchema {
    name: "S-2399",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("dataInicio", FieldKind::Date),
        FieldSpec::required("dataTermino", FieldKind::Date),
        FieldSpec::optional("codigoMotivoTermino", text(10)),
        OBSERVATION,
    ],
};

pub(super) static S2400: RecordSchema = RecordSchema {
    name: "S-2400",
    extends: &[&BENEFIT],
    checks: &[],
    fields: &[FieldSpec::optional("dataNascimento", FieldKind::Date)],
};
