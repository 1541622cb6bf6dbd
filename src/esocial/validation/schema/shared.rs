//! Blocks repeated across several event layouts.

use super::{FieldSpec, Presence, RecordCheck, RecordSchema};
use crate::esocial::validation::fields::FieldKind;

pub(super) const YES_NO: &[&str] = &["S", "N"];
pub(super) const BINARY: &[&str] = &["0", "1"];
pub(super) const INSCRIPTION_TYPES: &[&str] = &["1", "2", "3", "4"];

pub(super) const fn text(max: usize) -> FieldKind {
    FieldKind::Text { min: 1, max }
}

pub(super) const CURRENCY: FieldKind = FieldKind::Currency { max_cents: None };
pub(super) const CATEGORY: FieldKind = FieldKind::Integer { min: 101, max: 905 };

pub(super) const CPF: FieldSpec = FieldSpec::required("cpf", FieldKind::IndividualId);
pub(super) const OBSERVATION: FieldSpec = FieldSpec::optional("observacao", text(1000));

/// Street address without a location type.
pub(super) static ADDRESS: RecordSchema = RecordSchema {
    name: "address",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("endereco", text(200)),
        FieldSpec::required("cep", FieldKind::PostalCode),
        FieldSpec::required("municipio", text(100)),
        FieldSpec::required("uf", FieldKind::StateCode),
    ],
};

pub(super) static LOCATION: RecordSchema = RecordSchema {
    name: "location",
    extends: &[&ADDRESS],
    checks: &[],
    fields: &[FieldSpec::required("tipo", text(60))],
};

pub(super) static NAMED_LOCATION: RecordSchema = RecordSchema {
    name: "named location",
    extends: &[&LOCATION],
    checks: &[],
    fields: &[FieldSpec::required("nome", text(100))],
};

pub(super) static PHYSICIAN: RecordSchema = RecordSchema {
    name: "physician",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("nome", text(100)),
        FieldSpec::required("crm", text(20)),
        FieldSpec::required("uf", FieldKind::StateCode),
    ],
};

/// Numbered medical document: certificates and ASOs.
pub(super) static CERTIFICATE: RecordSchema = RecordSchema {
    name: "medical certificate",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("numero", text(30)),
        FieldSpec::required("dataEmissao", FieldKind::Date),
    ],
};

pub(super) static WORKER_IDENTITY: RecordSchema = RecordSchema {
    name: "worker identity",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("nome", text(100)),
        FieldSpec::required("dataNascimento", FieldKind::Date),
        FieldSpec::required("pis", FieldKind::WorkerRegistrationId),
    ],
};

/// `tpInsc` / `nrInsc` pair; the number is matched against the type by
/// a record check.
pub(super) static EMPLOYER_INSCRIPTION: RecordSchema = RecordSchema {
    name: "employer inscription",
    extends: &[],
    checks: &[RecordCheck::INSCRIPTION],
    fields: &[
        FieldSpec::required("tpInsc", FieldKind::Code(INSCRIPTION_TYPES)),
        FieldSpec::required("nrInsc", FieldKind::InscriptionNumber),
    ],
};

/// `ideEvento` block of periodic events.
pub(super) static EVENT_IDENTIFICATION: RecordSchema = RecordSchema {
    name: "event identification",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("indRetif", FieldKind::Code(&["1", "2"])),
        FieldSpec::optional("nrRecibo", FieldKind::FixedLength(44)),
        FieldSpec::required("perApur", FieldKind::YearMonth),
        FieldSpec::required("indApuracao", FieldKind::Code(&["1", "2"])),
        FieldSpec::required("indGuia", FieldKind::Code(&["1", "2"])),
        FieldSpec::required("tpAmb", FieldKind::Code(&["1", "2"])),
        FieldSpec::required("procEmi", FieldKind::Code(&["1", "2", "3", "4", "5"])),
        FieldSpec::required("verProc", text(20)),
    ],
};

/// `ideTrabalhador` as referenced by periodic and totalizer events.
pub(super) static WORKER_REFERENCE: RecordSchema = RecordSchema {
    name: "worker reference",
    extends: &[],
    checks: &[],
    fields: &[FieldSpec::required("cpfTrab", FieldKind::IndividualId)],
};

pub(super) static BENEFIT: RecordSchema = RecordSchema {
    name: "benefit",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("dataInicioBeneficio", FieldKind::Date),
        FieldSpec::required("tipoBeneficio", text(60)),
        FieldSpec::required("valorBeneficio", CURRENCY),
        FieldSpec::optional("dataFimBeneficio", FieldKind::Date),
        FieldSpec::optional("motivoFimBeneficio", text(200)),
        OBSERVATION,
    ],
};

pub(super) const fn required_record(name: &'static str, schema: &'static RecordSchema) -> FieldSpec {
    FieldSpec::record(name, Presence::Required, schema)
}

pub(super) const fn optional_record(name: &'static str, schema: &'static RecordSchema) -> FieldSpec {
    FieldSpec::record(name, Presence::Optional, schema)
}
