use crate::record::{Membership, Record};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven roster buckets, in their fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bucket {
    DumbledoresArmy,
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
    Ghosts,
    Instructors,
}

impl Bucket {
    pub const ALL: [Bucket; 7] = [
        Bucket::DumbledoresArmy,
        Bucket::Gryffindor,
        Bucket::Hufflepuff,
        Bucket::Ravenclaw,
        Bucket::Slytherin,
        Bucket::Ghosts,
        Bucket::Instructors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Bucket::DumbledoresArmy => "Dumbledore's Army",
            Bucket::Gryffindor => "Gryffindor",
            Bucket::Hufflepuff => "Hufflepuff",
            Bucket::Ravenclaw => "Ravenclaw",
            Bucket::Slytherin => "Slytherin",
            Bucket::Ghosts => "Ghosts",
            Bucket::Instructors => "Instructors",
        }
    }

    /// Position in [`Bucket::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact match on a house field value. Only the five houses match.
    pub fn from_house(house: &str) -> Option<Bucket> {
        match house {
            "Dumbledore's Army" => Some(Bucket::DumbledoresArmy),
            "Gryffindor" => Some(Bucket::Gryffindor),
            "Hufflepuff" => Some(Bucket::Hufflepuff),
            "Ravenclaw" => Some(Bucket::Ravenclaw),
            "Slytherin" => Some(Bucket::Slytherin),
            _ => None,
        }
    }

    /// Bucket for a record, or `None` when it belongs to none of the seven:
    /// an unrecognized house, or no house with a marker other than `G`/`I`.
    pub fn for_record(record: &Record) -> Option<Bucket> {
        if !record.house.is_empty() {
            return Bucket::from_house(&record.house);
        }

        match record.membership() {
            Membership::Ghost => Some(Bucket::Ghosts),
            Membership::Instructor => Some(Bucket::Instructors),
            Membership::Student => None,
        }
    }

    pub fn is_house(self) -> bool {
        !matches!(self, Bucket::Ghosts | Bucket::Instructors)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
