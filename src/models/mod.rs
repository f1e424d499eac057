mod user;

pub use user::{ChannelPreferences, NewUserRecord, UserRecord};
