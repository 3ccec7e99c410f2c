//! Symptom enumeration and the per-entry symptom set

use crate::error::HolterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A symptom the wearer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symptom {
    #[serde(rename = "None or accidental push")]
    NoneOrAccidentalPush,
    #[serde(rename = "Light-headedness")]
    LightHeadedness,
    #[serde(rename = "Rapid or fast beats")]
    RapidBeats,
    #[serde(rename = "Flutter or skipped beats")]
    FlutterOrSkippedBeats,
    #[serde(rename = "Shortness of breath")]
    ShortnessOfBreath,
    #[serde(rename = "Chest pain or pressure")]
    ChestPain,
    Dizziness,
    #[serde(rename = "Tired or fatigued")]
    Fatigue,
    #[serde(rename = "Passed out")]
    PassedOut,
}

impl Symptom {
    /// All symptoms in display order
    pub const ALL: [Symptom; 9] = [
        Symptom::NoneOrAccidentalPush,
        Symptom::LightHeadedness,
        Symptom::RapidBeats,
        Symptom::FlutterOrSkippedBeats,
        Symptom::ShortnessOfBreath,
        Symptom::ChestPain,
        Symptom::Dizziness,
        Symptom::Fatigue,
        Symptom::PassedOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::NoneOrAccidentalPush => "None or accidental push",
            Symptom::LightHeadedness => "Light-headedness",
            Symptom::RapidBeats => "Rapid or fast beats",
            Symptom::FlutterOrSkippedBeats => "Flutter or skipped beats",
            Symptom::ShortnessOfBreath => "Shortness of breath",
            Symptom::ChestPain => "Chest pain or pressure",
            Symptom::Dizziness => "Dizziness",
            Symptom::Fatigue => "Tired or fatigued",
            Symptom::PassedOut => "Passed out",
        }
    }

    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(Symptom::label)
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symptom {
    type Err = HolterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|symptom| symptom.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HolterError::InvalidSymptom(s.to_string()))
    }
}

/// Symptoms reported for one entry.
///
/// Keeps the order in which symptoms were checked, since that is the order
/// they appear in exports. A symptom can appear at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Symptom>", into = "Vec<Symptom>")]
pub struct SymptomSet {
    items: Vec<Symptom>,
}

impl SymptomSet {
    pub fn new() -> Self {
        SymptomSet::default()
    }

    pub fn contains(&self, symptom: Symptom) -> bool {
        self.items.contains(&symptom)
    }

    /// Remove the symptom if present, otherwise append it.
    /// Returns true when the symptom is present afterwards.
    pub fn toggle(&mut self, symptom: Symptom) -> bool {
        if let Some(pos) = self.items.iter().position(|s| *s == symptom) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(symptom);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Labels joined with `"; "`, in insertion order
    pub fn joined(&self) -> String {
        self.items
            .iter()
            .map(Symptom::label)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl From<Vec<Symptom>> for SymptomSet {
    fn from(symptoms: Vec<Symptom>) -> Self {
        let mut set = SymptomSet::new();
        for symptom in symptoms {
            if !set.contains(symptom) {
                set.items.push(symptom);
            }
        }
        set
    }
}

impl From<SymptomSet> for Vec<Symptom> {
    fn from(set: SymptomSet) -> Self {
        set.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_nine_symptoms() {
        assert_eq!(Symptom::ALL.len(), 9);
        assert_eq!(Symptom::labels().next(), Some("None or accidental push"));
        assert_eq!(Symptom::labels().last(), Some("Passed out"));
    }

    #[test]
    fn test_from_str_matches_labels() {
        for symptom in Symptom::ALL {
            assert_eq!(Symptom::from_str(symptom.label()).unwrap(), symptom);
        }
        assert_eq!(
            Symptom::from_str("light-HEADEDNESS").unwrap(),
            Symptom::LightHeadedness
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(matches!(
            Symptom::from_str("Headache"),
            Err(HolterError::InvalidSymptom(_))
        ));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = SymptomSet::new();
        assert!(set.toggle(Symptom::Dizziness));
        assert!(set.contains(Symptom::Dizziness));
        assert!(!set.toggle(Symptom::Dizziness));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_order() {
        let mut set = SymptomSet::from(vec![Symptom::Dizziness, Symptom::Fatigue]);
        let before = set.clone();
        set.toggle(Symptom::PassedOut);
        set.toggle(Symptom::PassedOut);
        assert_eq!(set, before);
    }

    #[test]
    fn test_joined_keeps_insertion_order() {
        let mut set = SymptomSet::new();
        set.toggle(Symptom::Fatigue);
        set.toggle(Symptom::Dizziness);
        assert_eq!(set.joined(), "Tired or fatigued; Dizziness");
    }

    #[test]
    fn test_from_vec_drops_duplicates() {
        let set = SymptomSet::from(vec![
            Symptom::ChestPain,
            Symptom::Dizziness,
            Symptom::ChestPain,
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Symptom::ChestPain, Symptom::Dizziness]
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_label() {
        let result: std::result::Result<SymptomSet, _> =
            serde_json::from_str(r#"["Dizziness", "Headache"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_label_array() {
        let set = SymptomSet::from(vec![Symptom::RapidBeats]);
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["Rapid or fast beats"]"#
        );
    }
}
