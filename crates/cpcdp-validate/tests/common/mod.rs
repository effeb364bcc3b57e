//! Record fixtures shared by the validation tests.
//!
//! Each fixture is a section of a CPCDP form with the rules of the real
//! platform, trimmed to the fields a scenario needs.

#![allow(dead_code)]

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use cpcdp_model::{
    Condition, ConditionGroup, FieldDef, FieldValue, Record, RuleTable, coded_enum,
};

coded_enum! {
    /// Arrival mode.
    pub enum CwComingWayCode {
        Ambulance => ("1", "called ambulance"),
        Transfer => ("2", "transfer from another hospital"),
        WalkIn => ("3", "walk-in"),
        InHospital => ("4", "in-hospital onset"),
    }
}

coded_enum! {
    /// Transfer type.
    pub enum CwZyTransType {
        NetworkHospital => ("1", "network hospital"),
        OtherHospital => ("2", "non-network hospital"),
    }
}

coded_enum! {
    /// Initial diagnosis.
    pub enum CpDiagnosisCode {
        Stemi => ("1", "STEMI"),
        Nstemi => ("2", "NSTEMI"),
        UnstableAngina => ("3", "UA"),
    }
}

coded_enum! {
    /// Reperfusion measure.
    pub enum StemiMeasures {
        DirectPci => ("1", "primary PCI"),
        Thrombolysis => ("2", "thrombolysis"),
        ElectivePci => ("3", "elective PCI"),
        Cabg => ("4", "CABG"),
    }
}

coded_enum! {
    /// Follow-up after thrombolysis.
    pub enum StemiMeasuresThrombolysis {
        RescuePci => ("1", "rescue PCI"),
        Intervention => ("2", "post-thrombolysis intervention"),
    }
}

coded_enum! {
    /// GRACE high-risk conditions (multi-select).
    pub enum NstemiGraceHrCondition {
        Hemodynamic => ("1", "hemodynamic instability"),
        Arrhythmia => ("2", "life-threatening arrhythmia"),
        RecurrentPain => ("3", "recurrent chest pain"),
        StChanges => ("4", "dynamic ST changes"),
    }
}

pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 11, 8)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid fixture time")
}

// ---------------------------------------------------------------------------
// ECG section of a treatment record
// ---------------------------------------------------------------------------

static ECG_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    RuleTable::builder("Treatment")
        .field(
            FieldDef::new("hasEcgImage")
                .required()
                .allow_values(["0", "1"])
                .allowed_message("0: none, 1: present"),
        )
        .field(
            FieldDef::new("noEcgImageReason")
                .required()
                .when(Condition::on("hasEcgImage").equals(["0"])),
        )
        .field(
            FieldDef::new("ecgs")
                .required()
                .when(Condition::on("hasEcgImage").equals(["1"])),
        )
        .field(FieldDef::new("isRemoteEcgtran").allow_values(["0", "1"]))
        .build()
        .expect("treatment ECG rules")
});

static ECG_ENTRY_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    RuleTable::builder("Ecg")
        .plain("attachment")
        .plain("ecgTime")
        .build()
        .expect("ECG entry rules")
});

pub struct EcgEntry {
    pub attachment: String,
    pub ecg_time: NaiveDateTime,
}

impl Record for EcgEntry {
    fn rules(&self) -> &RuleTable {
        &ECG_ENTRY_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "attachment" => (&self.attachment).into(),
            "ecgTime" => self.ecg_time.into(),
            _ => return None,
        })
    }
}

#[derive(Default)]
pub struct EcgSection {
    pub has_ecg_image: Option<String>,
    pub no_ecg_image_reason: Option<String>,
    pub ecgs: Option<Vec<EcgEntry>>,
    pub is_remote_ecgtran: Option<String>,
}

impl Record for EcgSection {
    fn rules(&self) -> &RuleTable {
        &ECG_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "hasEcgImage" => self.has_ecg_image.as_ref().into(),
            "noEcgImageReason" => self.no_ecg_image_reason.as_ref().into(),
            "ecgs" => FieldValue::records(self.ecgs.as_deref()),
            "isRemoteEcgtran" => self.is_remote_ecgtran.as_ref().into(),
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// Arrival section of a first-aid record
// ---------------------------------------------------------------------------

static ARRIVAL_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    let transfer = || Condition::on("cwComingWayCode").equals(["2"]).keyed();
    let network = || Condition::on("cwZyTransType").equals(["1"]).keyed();
    RuleTable::builder("FirstAid")
        .field(FieldDef::new("cwComingWayCode").required())
        .field(
            FieldDef::new("cw120HelpTime")
                .required()
                .json_key("CW_120_HELP_TIME")
                .when(Condition::on("cwComingWayCode").equals(["1"]).keyed()),
        )
        .field(FieldDef::new("cwZyTransType").required().when(transfer()))
        .field(
            FieldDef::new("cwZyOuthospitalVisitTime")
                .required()
                .json_key("CW_ZY_OUTHOSPITAL_VISIT_TIME")
                .when_all(vec![transfer(), network()]),
        )
        .field(
            FieldDef::new("cwZyTransferTime")
                .required()
                .when_all(vec![transfer(), network()]),
        )
        .build()
        .expect("first aid arrival rules")
});

#[derive(Default)]
pub struct ArrivalSection {
    pub cw_coming_way_code: Option<CwComingWayCode>,
    pub cw120_help_time: Option<NaiveDateTime>,
    pub cw_zy_trans_type: Option<CwZyTransType>,
    pub cw_zy_outhospital_visit_time: Option<NaiveDateTime>,
    pub cw_zy_transfer_time: Option<NaiveDateTime>,
}

impl Record for ArrivalSection {
    fn rules(&self) -> &RuleTable {
        &ARRIVAL_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "cwComingWayCode" => FieldValue::coded(self.cw_coming_way_code.as_ref()),
            "cw120HelpTime" => self.cw120_help_time.into(),
            "cwZyTransType" => FieldValue::coded(self.cw_zy_trans_type.as_ref()),
            "cwZyOuthospitalVisitTime" => self.cw_zy_outhospital_visit_time.into(),
            "cwZyTransferTime" => self.cw_zy_transfer_time.into(),
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// STEMI reperfusion section of a treatment record
// ---------------------------------------------------------------------------

static REPERFUSION_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    let stemi = || Condition::on("cpDiagnosisCode").equals(["1"]).keyed();
    let reperfused = || Condition::on("stemiIsReperfusion").equals(["1"]);
    let measures = |keys: &[&str]| {
        Condition::on("stemiMeasures")
            .equals(keys.iter().copied())
            .keyed()
    };
    RuleTable::builder("Treatment")
        .field(FieldDef::new("cpDiagnosisCode").required())
        .field(
            FieldDef::new("stemiIsReperfusion")
                .required()
                .allow_values(["0", "1"])
                .when(stemi()),
        )
        .field(
            FieldDef::new("stemiMeasures")
                .required()
                .when_all(vec![stemi(), reperfused()]),
        )
        // Not required: its own rule only matters when other fields reference it.
        .field(
            FieldDef::new("stemiMeasuresThrombolysis")
                .when_all(vec![stemi(), reperfused(), measures(&["2"])]),
        )
        .field(
            FieldDef::new("stemiMeasuresDoctorName")
                .when_all(vec![stemi(), reperfused(), measures(&["1"])]),
        )
        .field(FieldDef::new("stemiDecisionOperationTime").required().when_any(vec![
            ConditionGroup::new(vec![stemi(), reperfused(), measures(&["1", "3"])]),
            ConditionGroup::new(vec![
                stemi(),
                reperfused(),
                measures(&["2"]),
                Condition::on("stemiMeasuresThrombolysis")
                    .equals(["1"])
                    .keyed(),
            ]),
        ]))
        .build()
        .expect("treatment reperfusion rules")
});

pub struct ReperfusionSection {
    pub cp_diagnosis_code: Option<CpDiagnosisCode>,
    pub stemi_is_reperfusion: Option<String>,
    pub stemi_measures: Option<StemiMeasures>,
    pub stemi_measures_thrombolysis: Option<StemiMeasuresThrombolysis>,
    pub stemi_measures_doctor_name: Option<String>,
    pub stemi_decision_operation_time: Option<NaiveDateTime>,
}

impl ReperfusionSection {
    /// A STEMI patient with reperfusion by `measures`.
    pub fn stemi(measures: StemiMeasures) -> Self {
        Self {
            cp_diagnosis_code: Some(CpDiagnosisCode::Stemi),
            stemi_is_reperfusion: Some("1".to_string()),
            stemi_measures: Some(measures),
            stemi_measures_thrombolysis: None,
            stemi_measures_doctor_name: None,
            stemi_decision_operation_time: None,
        }
    }
}

impl Record for ReperfusionSection {
    fn rules(&self) -> &RuleTable {
        &REPERFUSION_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "cpDiagnosisCode" => FieldValue::coded(self.cp_diagnosis_code.as_ref()),
            "stemiIsReperfusion" => self.stemi_is_reperfusion.as_ref().into(),
            "stemiMeasures" => FieldValue::coded(self.stemi_measures.as_ref()),
            "stemiMeasuresThrombolysis" => {
                FieldValue::coded(self.stemi_measures_thrombolysis.as_ref())
            }
            "stemiMeasuresDoctorName" => self.stemi_measures_doctor_name.as_ref().into(),
            "stemiDecisionOperationTime" => self.stemi_decision_operation_time.into(),
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// NSTEMI GRACE assessment
// ---------------------------------------------------------------------------

static GRACE_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    RuleTable::builder("Treatment")
        .plain("nstemiGraceHrCondition")
        .field(
            FieldDef::new("nstemiGraceValue").required().when(
                Condition::on("nstemiGraceHrCondition")
                    .equals(["1", "2"])
                    .any_within_array(),
            ),
        )
        .build()
        .expect("GRACE rules")
});

pub struct GraceAssessment {
    pub nstemi_grace_hr_condition: Option<Vec<NstemiGraceHrCondition>>,
    pub nstemi_grace_value: Option<i64>,
}

impl Record for GraceAssessment {
    fn rules(&self) -> &RuleTable {
        &GRACE_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "nstemiGraceHrCondition" => {
                FieldValue::coded_list(self.nstemi_grace_hr_condition.as_deref())
            }
            "nstemiGraceValue" => self.nstemi_grace_value.into(),
            _ => return None,
        })
    }
}
