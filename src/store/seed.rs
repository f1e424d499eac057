//! Startup seed records for the preference store.
//!
//! The store is memory-resident only; every process start begins from this
//! fixed set.

use crate::models::{ChannelPreferences, UserRecord};

/// Returns the fixed records the store is initialized with at startup.
pub fn seed_records() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            email: "ironman@avengers.com".to_string(),
            phone: "+123456789".to_string(),
            preferences: ChannelPreferences {
                email: true,
                sms: true,
            },
        },
        UserRecord {
            id: 2,
            email: "loki@avengers.com".to_string(),
            phone: "+123456788".to_string(),
            preferences: ChannelPreferences {
                email: true,
                sms: false,
            },
        },
        UserRecord {
            id: 3,
            email: "hulk@avengers.com".to_string(),
            phone: "+123456787".to_string(),
            preferences: ChannelPreferences {
                email: false,
                sms: false,
            },
        },
        UserRecord {
            id: 4,
            email: "blackwidow@avengers.com".to_string(),
            phone: "+123456786".to_string(),
            preferences: ChannelPreferences {
                email: true,
                sms: true,
            },
        },
    ]
}
