//! Event exclusion and the totalizers returned by the government gateway.

use super::shared::{
    CATEGORY, CURRENCY, EMPLOYER_INSCRIPTION, INSCRIPTION_TYPES, WORKER_REFERENCE, YES_NO,
    optional_record, required_record, text,
};
use super::{FieldSpec, Presence, RecordCheck, RecordSchema};
use crate::esocial::validation::fields::FieldKind;

const EXISTENCE: FieldKind = FieldKind::Code(&["1", "2", "3"]);
const REVENUE_CODE: FieldKind = FieldKind::Digits(6);

/// Receipt of the source event and the period it refers to.
static TOTALIZER_HEADER: RecordSchema = RecordSchema {
    name: "totalizer header",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("nrRecArqBase", text(40)),
        FieldSpec::required("perApur", FieldKind::YearMonth),
    ],
};

static PAYROLL_REFERENCE: RecordSchema = RecordSchema {
    name: "payroll reference",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("indApuracao", FieldKind::Code(&["1", "2"])),
        FieldSpec::required("perApur", FieldKind::YearMonth),
    ],
};

pub(super) static S3000: RecordSchema = RecordSchema {
    name: "S-3000",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("tpEvento", FieldKind::EventCode),
        FieldSpec::required("nrRecEvt", text(40)),
        optional_record("ideTrabalhador", &WORKER_REFERENCE),
        optional_record("ideFolhaPagto", &PAYROLL_REFERENCE),
    ],
};

static CONTRIBUTION: RecordSchema = RecordSchema {
    name: "calculated contribution",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("tpCR", REVENUE_CODE),
        FieldSpec::required("vrCpSeg", CURRENCY),
        FieldSpec::required("vrDescSeg", CURRENCY),
    ],
};

pub(super) static S5001: RecordSchema = RecordSchema {
    name: "S-5001",
    extends: &[&TOTALIZER_HEADER],
    checks: &[],
    fields: &[
        required_record("ideTrabalhador", &WORKER_REFERENCE),
        FieldSpec::list("infoCpCalc", Presence::Required, &CONTRIBUTION, 1, None),
    ],
};

static WITHHOLDING: RecordSchema = RecordSchema {
    name: "income tax withholding",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("codCateg", CATEGORY),
        FieldSpec::required("indResBr", FieldKind::Code(YES_NO)),
        FieldSpec::required("vrBaseIrrf", CURRENCY),
        FieldSpec::required("vrIrrfDesc", CURRENCY),
    ],
};

pub(super) static S5002: RecordSchema = RecordSchema {
    name: "S-5002",
    extends: &[&TOTALIZER_HEADER],
    checks: &[],
    fields: &[
        required_record("ideTrabalhador", &WORKER_REFERENCE),
        FieldSpec::list("infoIrrf", Presence::Required, &WITHHOLDING, 1, None),
    ],
};

static FGTS_LOT: RecordSchema = RecordSchema {
    name: "FGTS establishment lot",
    extends: &[],
    checks: &[RecordCheck::INSCRIPTION],
    fields: &[
        FieldSpec::required("tpInsc", FieldKind::Code(INSCRIPTION_TYPES)),
        FieldSpec::required("nrInsc", FieldKind::InscriptionNumber),
        FieldSpec::required("codLotacao", text(30)),
        FieldSpec::required("vrBcFGTS", CURRENCY),
        FieldSpec::required("vrFGTS", CURRENCY),
    ],
};

static WORKER_FGTS: RecordSchema = RecordSchema {
    name: "worker FGTS",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::optional("dtVenc", FieldKind::Date),
        FieldSpec::list("ideEstabLot", Presence::Required, &FGTS_LOT, 1, None),
    ],
};

pub(super) static S5003: RecordSchema = RecordSchema {
    name: "S-5003",
    extends: &[&TOTALIZER_HEADER],
    checks: &[],
    fields: &[
        required_record("ideTrabalhador", &WORKER_REFERENCE),
        required_record("infoFGTS", &WORKER_FGTS),
    ],
};

static ESTABLISHMENT_CONTRIBUTION: RecordSchema = RecordSchema {
    name: "establishment contribution",
    extends: &[],
    checks: &[RecordCheck::INSCRIPTION],
    fields: &[
        FieldSpec::required("tpInsc", FieldKind::Code(INSCRIPTION_TYPES)),
        FieldSpec::required("nrInsc", FieldKind::InscriptionNumber),
        FieldSpec::required("vrBcCp", CURRENCY),
        FieldSpec::required("vrCpSeg", CURRENCY),
    ],
};

static EMPLOYER_CONTRIBUTIONS: RecordSchema = RecordSchema {
    name: "employer contributions",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("indExistInfo", EXISTENCE),
        FieldSpec::list("ideEstab", Presence::Optional, &ESTABLISHMENT_CONTRIBUTION, 0, None),
    ],
};

pub(super) static S5011: RecordSchema = RecordSchema {
    name: "S-5011",
    extends: &[&TOTALIZER_HEADER],
    checks: &[],
    fields: &[
        required_record("ideEmpregador", &EMPLOYER_INSCRIPTION),
        required_record("infoCS", &EMPLOYER_CONTRIBUTIONS),
    ],
};

static REVENUE: RecordSchema = RecordSchema {
    name: "revenue code total",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("tpCR", REVENUE_CODE),
        FieldSpec::required("vrCR", CURRENCY),
    ],
};

static EMPLOYER_WITHHOLDING: RecordSchema = RecordSchema {
    name: "employer income tax",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("indExistInfo", EXISTENCE),
        FieldSpec::list("infoCRContrib", Presence::Optional, &REVENUE, 0, None),
    ],
};

pub(super) static S5012: RecordSchema = RecordSchema {
    name: "S-5012",
    extends: &[&TOTALIZER_HEADER],
    checks: &[],
    fields: &[
        required_record("ideEmpregador", &EMPLOYER_INSCRIPTION),
        required_record("infoIRRF", &EMPLOYER_WITHHOLDING),
    ],
};

static ESTABLISHMENT_FGTS: RecordSchema = RecordSchema {
    name: "establishment FGTS",
    extends: &[],
    checks: &[RecordCheck::INSCRIPTION],
    fields: &[
        FieldSpec::required("tpInsc", FieldKind::Code(INSCRIPTION_TYPES)),
        FieldSpec::required("nrInsc", FieldKind::InscriptionNumber),
        FieldSpec::required("vrBcFGTS", CURRENCY),
        FieldSpec::required("vrFGTS", CURRENCY),
    ],
};

static EMPLOYER_FGTS: RecordSchema = RecordSchema {
    name: "employer FGTS",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("indExistInfo", EXISTENCE),
        FieldSpec::list("ideEstab", Presence::Optional, &ESTABLISHMENT_FGTS, 0, None),
    ],
};

pub(super) static S5013: RecordSchema = RecordSchema {
    name: "S-5013",
    extends: &[&TOTALIZER_HEADER],
    checks: &[],
    fields: &[
        required_record("ideEmpregador", &EMPLOYER_INSCRIPTION),
        required_record("infoFGTS", &EMPLOYER_FGTS),
    ],
};
