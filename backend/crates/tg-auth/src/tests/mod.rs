
use crate::IdentityRecord;

pub(crate) const TEST_BOT_TOKEN: &str = "123456:TEST-TOKEN";

/// Record with every optional field populated
pub(crate) fn full_record() -> IdentityRecord {
    IdentityRecord {
        id: 42,
        first_name: "Pavel".to_string(),
        last_name: "Durov".to_string(),
        username: "durov".to_string(),
        photo_url: "https://t.me/i/userpic/320/durov.jpg".to_string(),
        auth_date: 1_700_000_000,
        hash: String::new(),
    }
}

/// Record with only the required fields
pub(crate) fn minimal_record() -> IdentityRecord {
    IdentityRecord {
        id: 1,
        first_name: "test".to_string(),
        auth_date: 1,
        hash: "test".to_string(),
        ..Default::default()
    }
}
