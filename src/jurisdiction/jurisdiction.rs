use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

/// German federal states, the first-level jurisdictions to which holiday
/// applicability is scoped. Keys and codes follow DESTATIS.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub enum Jurisdiction {
    SchleswigHolstein,
    Hamburg,
    Niedersachsen,
    Bremen,
    NordrheinWestfalen,
    Hessen,
    RheinlandPfalz,
    BadenWuerttemberg,
    Bayern,
    Saarland,
    Berlin,
    Brandenburg,
    MecklenburgVorpommern,
    Sachsen,
    SachsenAnhalt,
    Thueringen
}

impl Jurisdiction {
    /// All states in key order.
    pub const ALL: [Jurisdiction; 16] = [
        Jurisdiction::SchleswigHolstein,
        Jurisdiction::Hamburg,
        Jurisdiction::Niedersachsen,
        Jurisdiction::Bremen,
        Jurisdiction::NordrheinWestfalen,
        Jurisdiction::Hessen,
        Jurisdiction::RheinlandPfalz,
        Jurisdiction::BadenWuerttemberg,
        Jurisdiction::Bayern,
        Jurisdiction::Saarland,
        Jurisdiction::Berlin,
        Jurisdiction::Brandenburg,
        Jurisdiction::MecklenburgVorpommern,
        Jurisdiction::Sachsen,
        Jurisdiction::SachsenAnhalt,
        Jurisdiction::Thueringen
    ];

    pub const fn key(&self) -> u8 {
        match self {
            Jurisdiction::SchleswigHolstein     => 1,
            Jurisdiction::Hamburg               => 2,
            Jurisdiction::Niedersachsen         => 3,
            Jurisdiction::Bremen                => 4,
            Jurisdiction::NordrheinWestfalen    => 5,
            Jurisdiction::Hessen                => 6,
            Jurisdiction::RheinlandPfalz        => 7,
            Jurisdiction::BadenWuerttemberg     => 8,
            Jurisdiction::Bayern                => 9,
            Jurisdiction::Saarland              => 10,
            Jurisdiction::Berlin                => 11,
            Jurisdiction::Brandenburg           => 12,
            Jurisdiction::MecklenburgVorpommern => 13,
            Jurisdiction::Sachsen               => 14,
            Jurisdiction::SachsenAnhalt         => 15,
            Jurisdiction::Thueringen            => 16
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Jurisdiction::SchleswigHolstein     => "SH",
            Jurisdiction::Hamburg               => "HH",
            Jurisdiction::Niedersachsen         => "NI",
            Jurisdiction::Bremen                => "HB",
            Jurisdiction::NordrheinWestfalen    => "NW",
            Jurisdiction::Hessen                => "HE",
            Jurisdiction::RheinlandPfalz        => "RP",
            Jurisdiction::BadenWuerttemberg     => "BW",
            Jurisdiction::Bayern                => "BY",
            Jurisdiction::Saarland              => "SL",
            Jurisdiction::Berlin                => "BE",
            Jurisdiction::Brandenburg           => "BB",
            Jurisdiction::MecklenburgVorpommern => "MV",
            Jurisdiction::Sachsen               => "SN",
            Jurisdiction::SachsenAnhalt         => "ST",
            Jurisdiction::Thueringen            => "TH"
        }
    }

    /// Older code still found in existing data, accepted on lookup only.
    pub const fn legacy_code(&self) -> Option<&'static str> {
        match self {
            Jurisdiction::SchleswigHolstein => Some("SW"),
            _ => None
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Jurisdiction::SchleswigHolstein     => "Schleswig-Holstein",
            Jurisdiction::Hamburg               => "Hamburg",
            Jurisdiction::Niedersachsen         => "Niedersachsen",
            Jurisdiction::Bremen                => "Bremen",
            Jurisdiction::NordrheinWestfalen    => "Nordrhein-Westfalen",
            Jurisdiction::Hessen                => "Hessen",
            Jurisdiction::RheinlandPfalz        => "Rheinland-Pfalz",
            Jurisdiction::BadenWuerttemberg     => "Baden-Württemberg",
            Jurisdiction::Bayern                => "Bayern",
            Jurisdiction::Saarland              => "Saarland",
            Jurisdiction::Berlin                => "Berlin",
            Jurisdiction::Brandenburg           => "Brandenburg",
            Jurisdiction::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            Jurisdiction::Sachsen               => "Sachsen",
            Jurisdiction::SachsenAnhalt         => "Sachsen-Anhalt",
            Jurisdiction::Thueringen            => "Thüringen"
        }
    }
}

impl Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Jurisdiction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sixteen_states_in_key_order() {
        assert_eq!(Jurisdiction::ALL.len(), 16);
        for (i, jurisdiction) in Jurisdiction::ALL.iter().enumerate() {
            assert_eq!(jurisdiction.key() as usize, i + 1);
        }
    }

    #[test]
    fn codes_are_unique_two_letter_upper_case() {
        let codes: HashSet<&str> = Jurisdiction::ALL.iter().map(|j| j.code()).collect();
        assert_eq!(codes.len(), 16);
        assert!(codes.iter().all(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_uppercase())));
    }

    #[test]
    fn bayern_data() {
        let bayern = Jurisdiction::Bayern;
        assert_eq!(bayern.key(), 9);
        assert_eq!(bayern.code(), "BY");
        assert_eq!(bayern.name(), "Bayern");
        assert_eq!(bayern.to_string(), "BY");
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&Jurisdiction::NordrheinWestfalen).unwrap();
        assert_eq!(json, "\"NW\"");
    }
}
