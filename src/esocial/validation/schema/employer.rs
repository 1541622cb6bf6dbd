//! Employer-level and periodic payroll events.

use super::shared::{
    BENEFIT, BINARY, CATEGORY, CPF, CURRENCY, EMPLOYER_INSCRIPTION, EVENT_IDENTIFICATION,
    INSCRIPTION_TYPES, WORKER_REFERENCE, YES_NO, optional_record, required_record, text,
};
use super::{FieldSpec, Presence, RecordCheck, RecordSchema};
use crate::esocial::validation::fields::FieldKind;

const CLASS_TRIB: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20",
];

static S1000_EMPLOYER: RecordSchema = RecordSchema {
    name: "S-1000 employer",
    extends: &[&EMPLOYER_INSCRIPTION],
    checks: &[],
    fields: &[
        FieldSpec::required("iniValid", FieldKind::YearMonth),
        FieldSpec::optional("fimValid", FieldKind::YearMonth),
    ],
};

static SMALL_BUSINESS: RecordSchema = RecordSchema {
    name: "small business entity",
    extends: &[],
    checks: &[RecordCheck::INSCRIPTION],
    fields: &[
        FieldSpec::required("tpInsc", FieldKind::Code(&["1", "4"])),
        FieldSpec::required("nrInsc", FieldKind::InscriptionNumber),
    ],
};

static APPRENTICE_CONTRACT: RecordSchema = RecordSchema {
    name: "apprentice contracting",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::optional("nrProcJud", text(20)),
        FieldSpec::required("contEntEd", FieldKind::Code(YES_NO)),
        optional_record("infoEntMe", &SMALL_BUSINESS),
    ],
};

static REGISTRATION: RecordSchema = RecordSchema {
    name: "registration details",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("classTrib", FieldKind::Code(CLASS_TRIB)),
        FieldSpec::optional("indCoop", FieldKind::Code(&["0", "1", "2"])),
        FieldSpec::optional("indConstr", FieldKind::Code(BINARY)),
        FieldSpec::optional("indDesFolha", FieldKind::Code(&["0", "1", "2"])),
        FieldSpec::optional("indOpcCP", FieldKind::Code(&["1", "2"])),
        FieldSpec::optional("indPorte", FieldKind::Code(&["0", "1", "2", "3", "4", "5"])),
        FieldSpec::optional("indOptRegEletron", FieldKind::Code(BINARY)),
        FieldSpec::optional("indEntEd", FieldKind::Code(YES_NO)),
        FieldSpec::optional("indEtt", FieldKind::Code(YES_NO)),
        FieldSpec::optional("nrRegEtt", text(30)),
        FieldSpec::optional("indAcordoIsenMulta", FieldKind::Code(BINARY)),
        FieldSpec::optional("sitPJ", FieldKind::Code(&["0", "1", "2", "3", "4"])),
        optional_record("contApr", &APPRENTICE_CONTRACT),
    ],
};

static EXEMPTION: RecordSchema = RecordSchema {
    name: "exemption certificate",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("ideMinLei", text(120)),
        FieldSpec::required("nrCertif", text(40)),
        FieldSpec::required("dtEmisCertif", FieldKind::Date),
        FieldSpec::required("dtVencCertif", FieldKind::Date),
        FieldSpec::optional("nrProtRenov", text(40)),
        FieldSpec::optional("dtProtRenov", FieldKind::Date),
        FieldSpec::optional("dtDou", FieldKind::Date),
        FieldSpec::optional("pagDou", text(5)),
    ],
};

static FEDERATIVE_ENTITY: RecordSchema = RecordSchema {
    name: "responsible federative entity",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("ideEFR", text(30)),
        FieldSpec::required("cnpjEFR", FieldKind::LegalEntityId),
        FieldSpec::required("indSit", FieldKind::Code(&["1", "2"])),
    ],
};

static PUBLIC_ENTITY: RecordSchema = RecordSchema {
    name: "public entity",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("nmEnte", text(100)),
        FieldSpec::required("uf", FieldKind::StateCode),
        FieldSpec::required("codMunic", FieldKind::Digits(7)),
        FieldSpec::required("indRPPS", FieldKind::Code(YES_NO)),
        FieldSpec::required("subteto", FieldKind::Code(YES_NO)),
        FieldSpec::optional("subtetoDec", CURRENCY),
    ],
};

static PUBLIC_BODY: RecordSchema = RecordSchema {
    name: "public body",
    extends: &[],
    checks: &[],
    fields: &[
        optional_record("infoEFR", &FEDERATIVE_ENTITY),
        required_record("infoEnte", &PUBLIC_ENTITY),
    ],
};

static INTERNATIONAL_BODY: RecordSchema = RecordSchema {
    name: "international organisation",
    extends: &[],
    checks: &[],
    fields: &[FieldSpec::required("indAcordoIsenMulta", FieldKind::Code(BINARY))],
};

pub(super) static S1000: RecordSchema = RecordSchema {
    name: "S-1000",
    extends: &[],
    checks: &[],
    fields: &[
        required_record("ideEmpregador", &S1000_EMPLOYER),
        required_record("infoCadastro", &REGISTRATION),
        optional_record("dadosIsencao", &EXEMPTION),
        optional_record("infoOP", &PUBLIC_BODY),
        optional_record("infoOrgInternacional", &INTERNATIONAL_BODY),
    ],
};

pub(super) static S1200: RecordSchema = RecordSchema {
    name: "S-1200",
    extends: &[],
    checks: &[],
    fields: &[
        CPF,
        FieldSpec::required("competencia", FieldKind::YearMonth),
        FieldSpec::required("valorTotal", CURRENCY),
        FieldSpec::required("valorBaseINSS", CURRENCY),
        FieldSpec::required("valorINSS", CURRENCY),
        FieldSpec::required("valorBaseIRRF", CURRENCY),
        FieldSpec::required("valorIRRF", CURRENCY),
        FieldSpec::required("valorBaseFGTS", CURRENCY),
        FieldSpec::required("valorFGTS", CURRENCY),
        FieldSpec::optional("valorOutrasEntidades", CURRENCY),
        FieldSpec::optional("valorOutrasDeducoes", CURRENCY),
        FieldSpec::required("valorLiquido", CURRENCY),
        FieldSpec::optional("observacoes", text(1000)),
    ],
};

static S1202_WORKER: RecordSchema = RecordSchema {
    name: "S-1202 worker",
    extends: &[&WORKER_REFERENCE],
    checks: &[],
    fields: &[
        FieldSpec::optional("nisTrab", FieldKind::WorkerRegistrationId),
        FieldSpec::required("nmTrab", text(70)),
        FieldSpec::required("sexo", FieldKind::Code(&["M", "F"])),
        FieldSpec::required("racaCor", text(6)),
        FieldSpec::required("estCiv", text(5)),
        FieldSpec::required("grauInstr", FieldKind::FixedLength(2)),
        FieldSpec::optional("nmSoc", text(70)),
    ],
};

static PAY_ITEM: RecordSchema = RecordSchema {
    name: "pay item",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("codRubr", text(30)),
        FieldSpec::required("ideTabRubr", text(8)),
        FieldSpec::optional("qtdRubr", CURRENCY),
        FieldSpec::required("vrRubr", CURRENCY),
        FieldSpec::required("indApurIR", FieldKind::Integer { min: 0, max: 1 }),
    ],
};

static ESTABLISHMENT_LOT: RecordSchema = RecordSchema {
    name: "establishment and tax lot",
    extends: &[],
    checks: &[RecordCheck::INSCRIPTION],
    fields: &[
        FieldSpec::required("tpInsc", FieldKind::Code(INSCRIPTION_TYPES)),
        FieldSpec::required("nrInsc", FieldKind::InscriptionNumber),
        FieldSpec::required("codLotacao", text(30)),
        FieldSpec::list("detVerbas", Presence::Required, &PAY_ITEM, 1, Some(200)),
    ],
};

static ASSESSMENT_PERIOD: RecordSchema = RecordSchema {
    name: "assessment period",
    extends: &[],
    checks: &[],
    fields: &[FieldSpec::list(
        "ideEstabLot",
        Presence::Required,
        &ESTABLISHMENT_LOT,
        1,
        Some(500),
    )],
};

static STATEMENT: RecordSchema = RecordSchema {
    name: "payment statement",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("ideDmDev", text(30)),
        FieldSpec::required("codCateg", CATEGORY),
        required_record("infoPerApur", &ASSESSMENT_PERIOD),
    ],
};

pub(super) static S1202: RecordSchema = RecordSchema {
    name: "S-1202",
    extends: &[],
    checks: &[],
    fields: &[
        required_record("ideEvento", &EVENT_IDENTIFICATION),
        required_record("ideEmpregador", &EMPLOYER_INSCRIPTION),
        required_record("ideTrabalhador", &S1202_WORKER),
        FieldSpec::list("dmDev", Presence::Required, &STATEMENT, 1, Some(999)),
    ],
};

pub(super) static S1207: RecordSchema = RecordSchema {
    name: "S-1207",
    extends: &[&BENEFIT],
    checks: &[],
    fields: &[],
};

static BENEFICIARY: RecordSchema = RecordSchema {
    name: "beneficiary",
    extends: &[],
    checks: &[],
    fields: &[FieldSpec::required("cpfBenef", FieldKind::IndividualId)],
};

static PAYMENT: RecordSchema = RecordSchema {
    name: "payment",
    extends: &[],
    checks: &[],
    fields: &[
        FieldSpec::required("dtPgto", FieldKind::Date),
        FieldSpec::required("tpPgto", FieldKind::Code(&["1", "2", "3", "4", "5"])),
        FieldSpec::required("perRef", FieldKind::YearMonth),
        FieldSpec::required("ideDmDev", text(30)),
        FieldSpec::required("vrLiq", CURRENCY),
    ],
};

pub(super) static S1210: RecordSchema = RecordSchema {
    name: "S-1210",
    extends: &[],
    checks: &[],
    fields: &[
        required_record("ideEvento", &EVENT_IDENTIFICATION),
        required_record("ideEmpregador", &EMPLOYER_INSCRIPTION),
        required_record("ideBenef", &BENEFICIARY),
        FieldSpec::list("infoPgto", Presence::Required, &PAYMENT, 1, None),
    ],
};
