// Club directory: club code to head coach.
//
// The built-in table is constructed once on first use. Configuration can
// layer extra or corrected entries on top of it.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

pub const UNKNOWN_MANAGER: &str = "Unknown";

const BUILTIN_MANAGERS: &[(&str, &str)] = &[
    ("REAL_MADRID", "Carlo Ancelotti"),
    ("MAN_CITY", "Pep Guardiola"),
    ("BARCELONA", "Hansi Flick"),
    ("LIVERPOOL", "Arne Slot"),
    ("BAYERN", "Vincent Kompany"),
    ("PSG", "Luis Enrique"),
    ("ARSENAL", "Mikel Arteta"),
    ("CHELSEA", "Enzo Maresca"),
    ("MAN_UTD", "Ruben Amorim"),
    ("JUVENTUS", "Thiago Motta"),
    ("INTER", "Simone Inzaghi"),
    ("MILAN", "Paulo Fonseca"),
    ("ATLETICO", "Diego Simeone"),
    ("TOTTENHAM", "Ange Postecoglou"),
    ("DORTMUND", "Nuri Şahin"),
    ("B_LEVERKUSEN", "Xabi Alonso"),
    ("NAPOLI", "Antonio Conte"),
    ("ASTON_VILLA", "Unai Emery"),
    ("NEWCASTLE", "Eddie Howe"),
    ("MARSEILLE", "Roberto De Zerbi"),
    ("INTER_MIAMI", "Javier Mascherano"),
];

static BUILTIN: Lazy<ClubDirectory> = Lazy::new(|| ClubDirectory {
    managers: BUILTIN_MANAGERS
        .iter()
        .map(|&(club, manager)| (club.to_string(), manager.to_string()))
        .collect(),
});

/// Read-only mapping from club code to manager name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubDirectory {
    managers: HashMap<String, String>,
}

impl ClubDirectory {
    /// The shipped club table.
    pub fn builtin() -> &'static ClubDirectory {
        &BUILTIN
    }

    /// The built-in table with `overrides` added on top (override wins).
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut managers = BUILTIN.managers.clone();
        for (club, manager) in overrides {
            managers.insert(club.trim().to_string(), manager.trim().to_string());
        }
        ClubDirectory { managers }
    }

    /// Manager for a club code, if the club is known.
    pub fn manager(&self, club: &str) -> Option<&str> {
        self.managers.get(club).map(String::as_str)
    }

    /// Manager for a club code, or `"Unknown"`.
    pub fn manager_or_unknown(&self, club: &str) -> &str {
        match self.manager(club) {
            Some(m) => m,
            None => {
                debug!("no manager on file for club '{}'", club);
                UNKNOWN_MANAGER
            }
        }
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }
}

impl Default for ClubDirectory {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
