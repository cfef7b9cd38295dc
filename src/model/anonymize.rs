use super::fields::{PATIENT_BIRTH_DATE, PATIENT_ID, PATIENT_NAME, PATIENT_SEX};
use super::metadata::MetadataRecord;

/// Identifying fields and the fixed placeholder each one is replaced with.
const PLACEHOLDERS: &[(&str, &str)] = &[
    (PATIENT_NAME, "ANONYMIZED"),
    (PATIENT_ID, "000000"),
    (PATIENT_BIRTH_DATE, "YYYYMMDD"),
    (PATIENT_SEX, "U"),
];

/// Returns a copy of `record` with patient-identifying fields overwritten
/// by fixed placeholders.
///
/// Only labels already present in the input are overwritten; nothing is
/// inserted. The input is left untouched, and applying the function twice
/// yields the same record as applying it once.
pub fn anonymize(record: &MetadataRecord) -> MetadataRecord {
    let mut anonymized = record.clone();
    for (label, placeholder) in PLACEHOLDERS {
        anonymized.replace(label, placeholder);
    }
    anonymized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> MetadataRecord {
        MetadataRecord::from_entries(vec![
            (PATIENT_NAME.to_string(), "DOE^JANE".to_string()),
            (PATIENT_ID.to_string(), "12345".to_string()),
            (PATIENT_BIRTH_DATE.to_string(), "19700101".to_string()),
            (PATIENT_SEX.to_string(), "F".to_string()),
            ("Modality".to_string(), "CT".to_string()),
        ])
    }

    #[test]
    fn identifying_fields_are_replaced_and_others_kept() {
        let anonymized = anonymize(&full_record());
        assert_eq!(anonymized.get(PATIENT_NAME), Some("ANONYMIZED"));
        assert_eq!(anonymized.get(PATIENT_ID), Some("000000"));
        assert_eq!(anonymized.get(PATIENT_BIRTH_DATE), Some("YYYYMMDD"));
        assert_eq!(anonymized.get(PATIENT_SEX), Some("U"));
        assert_eq!(anonymized.get("Modality"), Some("CT"));
    }

    #[test]
    fn input_record_is_not_mutated() {
        let record = full_record();
        let before = record.clone();
        let _ = anonymize(&record);
        assert_eq!(record, before);
    }

    #[test]
    fn idempotent() {
        let once = anonymize(&full_record());
        let twice = anonymize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn never_inserts_absent_labels() {
        let partial =
            MetadataRecord::from_entries(vec![("Modality".to_string(), "MR".to_string())]);
        let anonymized = anonymize(&partial);
        assert_eq!(anonymized.len(), 1);
        assert_eq!(anonymized.get(PATIENT_NAME), None);
    }

    #[test]
    fn empty_record_stays_empty() {
        let anonymized = anonymize(&MetadataRecord::default());
        assert!(anonymized.is_empty());
    }

    #[test]
    fn overwrites_the_unknown_fallback_too() {
        let anonymized = anonymize(&MetadataRecord::unknown());
        assert_eq!(anonymized.get(PATIENT_NAME), Some("ANONYMIZED"));
    }
}
