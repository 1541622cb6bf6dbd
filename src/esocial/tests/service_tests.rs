//! Unit tests for the validation service.

use super::fixtures::{
    advance_notice, default_validator, environmental_conditions, leave, now, paths_with,
    reference_instant, rpps_remuneration, strict_validator, summary, valid_payload, with, without,
};
use crate::esocial::{
    self,
    domain::{ErrorCode, EventType},
    ports::validator::{EventValidator, ValidationConfig},
    validation::service::DefaultEventValidator,
};
use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// Happy paths
// ============================================================================

#[rstest]
fn fixtures_pass_both_stages(default_validator: DefaultEventValidator, now: DateTime<Utc>) {
    for event_type in EventType::ALL {
        let result = default_validator.validate(event_type, &valid_payload(event_type), now);
        assert!(result.is_valid(), "{event_type}: {:?}", summary(&result));
    }
}

#[rstest]
fn validator_is_usable_as_trait_object(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let validator: &dyn EventValidator = &default_validator;
    assert!(validator.validate(EventType::S2250, &advance_notice(), now).is_valid());
}

#[test]
fn default_configuration_is_exposed() {
    assert_eq!(DefaultEventValidator::default().config(), &ValidationConfig::default());
    assert_eq!(
        DefaultEventValidator::with_config(ValidationConfig::strict()).config(),
        &ValidationConfig::strict()
    );
}

// ============================================================================
// Stage gating
// ============================================================================

#[rstest]
fn notice_ending_before_it_starts_is_a_single_cross_field_error(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let payload = json!({
        "cpf": "111.444.777-35",
        "dataAviso": "2024-02-01",
        "dataInicioAviso": "2024-03-01",
        "dataFimAviso": "2024-02-01",
        "tipoAviso": "1",
        "codigoMotivoAviso": "01"
    });
    let result = default_validator.validate(EventType::S2250, &payload, now);
    assert!(!result.is_valid());
    assert_eq!(summary(&result), ["CrossFieldError@dataFimAviso"]);
}

#[rstest]
fn structural_errors_suppress_cross_field_rules(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let payload = with(
        with(advance_notice(), "dataFimAviso", json!("2024-02-01")),
        "cpf",
        json!("123.456.789-00"),
    );
    let result = default_validator.validate(EventType::S2250, &payload, now);
    assert_eq!(summary(&result), ["ChecksumError@cpf"]);
}

#[rstest]
fn cross_field_stage_can_run_on_its_own(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let payload = with(advance_notice(), "dataFimAviso", json!("2024-02-01"));
    let structural = default_validator.validate_structure(EventType::S2250, &payload);
    let cross_field = default_validator.validate_cross_field(EventType::S2250, &payload, now);
    assert!(structural.is_valid());
    assert_eq!(summary(&cross_field), ["CrossFieldError@dataFimAviso"]);
}

#[rstest]
#[case(json!([]))]
#[case(json!("payload"))]
#[case(json!(null))]
fn non_object_payload_is_rejected_for_every_event_type(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
    #[case] payload: Value,
) {
    for event_type in EventType::ALL {
        let result = default_validator.validate(event_type, &payload, now);
        assert_eq!(summary(&result), ["FormatError@"], "{event_type}");
    }
}

// ============================================================================
// Conditional requirements
// ============================================================================

#[rstest]
fn compensated_notice_requires_indemnity(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let compensated = with(advance_notice(), "tipoAviso", json!("2"));
    let missing = default_validator.validate(EventType::S2250, &compensated, now);
    assert_eq!(summary(&missing), ["RequiredFieldMissing@indenizacao"]);

    let indemnified = with(
        compensated,
        "indenizacao",
        json!({ "valor": "1.500,00", "dataPagamento": "2024-03-31" }),
    );
    let result = default_validator.validate(EventType::S2250, &indemnified, now);
    assert!(result.is_valid(), "{:?}", summary(&result));
}

#[rstest]
fn worked_notice_needs_no_indemnity(default_validator: DefaultEventValidator, now: DateTime<Utc>) {
    let payload = without(advance_notice(), "indenizacao");
    assert!(default_validator.validate(EventType::S2250, &payload, now).is_valid());
}

#[rstest]
fn missing_indemnity_hides_ordering_failures(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let payload = with(
        with(advance_notice(), "tipoAviso", json!("2")),
        "dataFimAviso",
        json!("2024-02-01"),
    );
    let result = default_validator.validate(EventType::S2250, &payload, now);
    assert_eq!(summary(&result), ["RequiredFieldMissing@indenizacao"]);
}

#[rstest]
fn work_accident_requires_its_details(default_validator: DefaultEventValidator, now: DateTime<Utc>) {
    let accident = with(leave(), "acidenteTrabalho", json!({ "ocorreu": true }));
    let result = default_validator.validate(EventType::S2230, &accident, now);
    assert_eq!(
        summary(&result),
        [
            "RequiredFieldMissing@acidenteTrabalho.numeroCat",
            "RequiredFieldMissing@acidenteTrabalho.dataEmissaoCat",
            "RequiredFieldMissing@acidenteTrabalho.dataAcidente",
        ]
    );

    let documented = with(
        leave(),
        "acidenteTrabalho",
        json!({
            "ocorreu": true,
            "numeroCat": "CAT-2024-77",
            "dataAcidente": "2024-03-30",
            "dataEmissaoCat": "2024-04-01"
        }),
    );
    let accepted = default_validator.validate(EventType::S2230, &documented, now);
    assert!(accepted.is_valid(), "{:?}", summary(&accepted));
}

#[rstest]
fn accident_report_cannot_precede_the_accident(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let payload = with(
        leave(),
        "acidenteTrabalho",
        json!({
            "ocorreu": true,
            "numeroCat": "CAT-2024-77",
            "dataAcidente": "2024-04-02",
            "dataEmissaoCat": "2024-04-01"
        }),
    );
    let result = default_validator.validate(EventType::S2230, &payload, now);
    assert_eq!(summary(&result), ["CrossFieldError@acidenteTrabalho.dataEmissaoCat"]);
}

/// Each case names the discriminator, a value that triggers the
/// requirement, a value that does not (`None` removes the discriminator),
/// and the dependent field.
#[rstest]
#[case::employer_ett(EventType::S1000, "infoCadastro.indEtt", json!("S"), Some(json!("N")), "infoCadastro.nrRegEtt")]
#[case::employer_renewal(EventType::S1000, "dadosIsencao.dtProtRenov", json!("2025-11-03"), None, "dadosIsencao.nrProtRenov")]
#[case::employer_subceiling(EventType::S1000, "infoOP.infoEnte.subteto", json!("S"), Some(json!("N")), "infoOP.infoEnte.subtetoDec")]
#[case::rpps_benefit_end(EventType::S1207, "dataFimBeneficio", json!("2024-05-31"), None, "motivoFimBeneficio")]
#[case::admission_card_series(EventType::S2200, "carteiraTrabalho", json!("1234567"), None, "serieCarteiraTrabalho")]
#[case::admission_card_state(EventType::S2200, "carteiraTrabalho", json!("1234567"), None, "ufCarteiraTrabalho")]
#[case::change_card_series(EventType::S2205, "carteiraTrabalho", json!("1234567"), None, "serieCarteiraTrabalho")]
#[case::change_card_state(EventType::S2205, "carteiraTrabalho", json!("1234567"), None, "ufCarteiraTrabalho")]
#[case::accident_leave_days(EventType::S2210, "atestadoMedico.dataAfastamento", json!("2024-05-03"), None, "atestadoMedico.diasAfastamento")]
#[case::exam_restrictions(EventType::S2220, "resultadoExame", json!("R"), Some(json!("A")), "restricoes")]
#[case::leave_cat_number(EventType::S2230, "acidenteTrabalho.ocorreu", json!(true), Some(json!(false)), "acidenteTrabalho.numeroCat")]
#[case::leave_cat_issue(EventType::S2230, "acidenteTrabalho.ocorreu", json!(true), Some(json!(false)), "acidenteTrabalho.dataEmissaoCat")]
#[case::leave_accident_day(EventType::S2230, "acidenteTrabalho.ocorreu", json!(true), Some(json!(false)), "acidenteTrabalho.dataAcidente")]
#[case::notice_indemnity(EventType::S2250, "tipoAviso", json!("2"), Some(json!("1")), "indenizacao")]
#[case::termination_notice(EventType::S2299, "indPagtoAPI", json!("S"), Some(json!("N")), "dtProjFimAPI")]
#[case::beneficiary_end(EventType::S2400, "dataFimBeneficio", json!("2024-05-31"), None, "motivoFimBeneficio")]
#[case::exclusion_payroll(EventType::S3000, "tpEvento", json!("S-1210"), Some(json!("S-1000")), "ideFolhaPagto")]
#[case::exclusion_worker(EventType::S3000, "tpEvento", json!("S-2299"), Some(json!("S-1000")), "ideTrabalhador")]
#[case::contributions(EventType::S5011, "infoCS.indExistInfo", json!("1"), Some(json!("2")), "infoCS.ideEstab")]
#[case::withholding(EventType::S5012, "infoIRRF.indExistInfo", json!("1"), Some(json!("3")), "infoIRRF.infoCRContrib")]
#[case::fgts(EventType::S5013, "infoFGTS.indExistInfo", json!("1"), Some(json!("2")), "infoFGTS.ideEstab")]
fn catalog_conditional_requirements(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
    #[case] event_type: EventType,
    #[case] discriminator: &str,
    #[case] trigger: Value,
    #[case] quiet: Option<Value>,
    #[case] dependent: &str,
) {
    let bare = without(valid_payload(event_type), dependent);

    let triggered = with(bare.clone(), discriminator, trigger);
    let result = default_validator.validate(event_type, &triggered, now);
    let missing = paths_with(&result, ErrorCode::RequiredFieldMissing);
    assert!(
        missing.iter().any(|path| path == dependent),
        "{event_type}: {:?}",
        summary(&result)
    );
    assert_eq!(missing.len(), result.errors().len(), "{:?}", summary(&result));

    let untriggered = match quiet {
        Some(value) => with(bare, discriminator, value),
        None => without(bare, discriminator),
    };
    let accepted = default_validator.validate(event_type, &untriggered, now);
    assert!(accepted.is_valid(), "{event_type}: {:?}", summary(&accepted));
}

// ============================================================================
// Consistency rules
// ============================================================================

#[rstest]
fn expired_protective_equipment_is_rejected(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let mut payload = environmental_conditions();
    payload["epi"][0]["dataValidade"] = json!("2024-06-14");
    let result = default_validator.validate(EventType::S2240, &payload, now);
    assert_eq!(summary(&result), ["CrossFieldError@epi[0].dataValidade"]);
}

#[rstest]
fn repeated_statement_identifiers_are_rejected(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let mut payload = rpps_remuneration();
    let statement = payload["dmDev"][0].clone();
    payload["dmDev"]
        .as_array_mut()
        .expect("fixture holds an array")
        .push(statement);
    let result = default_validator.validate(EventType::S1202, &payload, now);
    assert_eq!(summary(&result), ["CrossFieldError@dmDev[1].ideDmDev"]);
}

#[rstest]
fn inscription_number_must_suit_inscription_type(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let mut payload = rpps_remuneration();
    payload["ideEmpregador"]["tpInsc"] = json!(2);
    let result = default_validator.validate(EventType::S1202, &payload, now);
    assert_eq!(summary(&result), ["CrossFieldError@ideEmpregador.nrInsc"]);
}

#[rstest]
fn competence_in_the_future_is_rejected(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let mut payload = rpps_remuneration();
    payload["ideEvento"]["perApur"] = json!("2024-07");
    let result = default_validator.validate(EventType::S1202, &payload, now);
    assert_eq!(summary(&result), ["CrossFieldError@ideEvento.perApur"]);
}

// ============================================================================
// Monotonic collection
// ============================================================================

#[rstest]
fn each_additional_defect_adds_its_own_error(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let defects = [
        ("cpf", json!("111.111.111-11"), "ChecksumError@cpf"),
        ("tipoAviso", json!("9"), "FormatError@tipoAviso"),
        ("dataInicioAviso", json!(null), "RequiredFieldMissing@dataInicioAviso"),
    ];

    let mut payload = advance_notice();
    let mut previous: Vec<String> = Vec::new();
    for (field, value, expected) in defects {
        payload = with(payload, field, value);
        let current = summary(&default_validator.validate(EventType::S2250, &payload, now));
        assert!(current.iter().any(|entry| entry == expected), "{current:?}");
        assert!(previous.iter().all(|entry| current.contains(entry)), "{current:?}");
        assert_eq!(current.len(), previous.len() + 1);
        previous = current;
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[rstest]
fn strict_configuration_narrows_the_year_window(
    default_validator: DefaultEventValidator,
    strict_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let payload = with(advance_notice(), "dataFimAviso", json!("2100-01-01"));
    assert!(default_validator.validate(EventType::S2250, &payload, now).is_valid());
    assert_eq!(
        summary(&strict_validator.validate(EventType::S2250, &payload, now)),
        ["RangeError@dataFimAviso"]
    );
}

// ============================================================================
// Tags, envelopes and clocks
// ============================================================================

#[rstest]
#[case("S-2250")]
#[case("s2250")]
#[case(" S2250 ")]
fn tagged_validation_accepts_known_spellings(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
    #[case] tag: &str,
) {
    assert!(default_validator.validate_tagged(tag, &advance_notice(), now).is_valid());
}

#[rstest]
#[case("S-9999")]
#[case("")]
#[case("evento")]
fn tagged_validation_rejects_unknown_tags(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
    #[case] tag: &str,
) {
    let result = default_validator.validate_tagged(tag, &advance_notice(), now);
    assert_eq!(summary(&result), ["UnknownEventType@"]);
}

#[rstest]
fn envelope_validation_dispatches_on_the_tag(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let accepted = json!({ "type": "S-2250", "payload": advance_notice() });
    assert!(default_validator.validate_envelope(&accepted, now).is_valid());

    let incomplete = json!({ "tipo": { "codigo": "S-2250" }, "payload": {} });
    let result = default_validator.validate_envelope(&incomplete, now);
    assert_eq!(result.errors_with_code(ErrorCode::RequiredFieldMissing).count(), 6);

    let unknown = json!({ "type": "S-0001", "payload": {} });
    assert_eq!(
        summary(&default_validator.validate_envelope(&unknown, now)),
        ["UnknownEventType@"]
    );
}

#[rstest]
fn clock_supplies_the_reference_instant(default_validator: DefaultEventValidator) {
    let clock = DefaultClock;
    assert!(
        default_validator
            .validate_at(EventType::S2250, &advance_notice(), &clock)
            .is_valid()
    );

    let mut payload = environmental_conditions();
    payload["agenteRisco"][0]["dataMedicao"] = json!("2099-12-31");
    payload["epi"][0]["dataValidade"] = json!("2100-12-31");
    let result = default_validator.validate_at(EventType::S2240, &payload, &clock);
    assert_eq!(summary(&result), ["CrossFieldError@agenteRisco[0].dataMedicao"]);
}

#[rstest]
fn free_function_matches_default_validator(
    default_validator: DefaultEventValidator,
    now: DateTime<Utc>,
) {
    let payload = with(leave(), "dataFimAfastamento", json!("2024-03-01"));
    assert_eq!(
        esocial::validate(EventType::S2230, &payload, now),
        default_validator.validate(EventType::S2230, &payload, now)
    );
}

// ============================================================================
// Properties
// ============================================================================

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[0-9./-]{0,20}".prop_map(Value::String),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(
                prop_oneof![
                    Just("cpf".to_owned()),
                    Just("dataAviso".to_owned()),
                    Just("tipoAviso".to_owned()),
                    Just("agenteRisco".to_owned()),
                    Just("dmDev".to_owned()),
                    "[a-z]{1,8}",
                ],
                inner,
                0..6,
            )
            .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn event_type() -> impl Strategy<Value = EventType> {
    prop::sample::select(EventType::ALL.to_vec())
}

proptest! {
    /// Validation is a pure function of its inputs.
    #[test]
    fn validation_is_deterministic(event_type in event_type(), payload in json_value()) {
        let validator = DefaultEventValidator::new();
        let instant = reference_instant();
        let first = validator.validate(event_type, &payload, instant);
        let second = validator.validate(event_type, &payload, instant);
        prop_assert_eq!(first, second);
    }

    /// The validity flag always agrees with the error list.
    #[test]
    fn validity_follows_errors(event_type in event_type(), payload in json_value()) {
        let result = DefaultEventValidator::new().validate(event_type, &payload, reference_instant());
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
    }
}
