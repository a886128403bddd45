use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Id for a new list item, taken from the creation time in milliseconds.
///
/// Two calls within the same millisecond get consecutive values, so ids issued
/// by one process never repeat.
pub fn new_item_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ISSUED.load(Ordering::Relaxed);

    loop {
        let next = if now > last { now } else { last + 1 };
        match LAST_ISSUED.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return next.to_string(),
            Err(actual) => last = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_in_a_tight_loop() {
        let ids: HashSet<String> = (0..1_000).map(|_| new_item_id()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn ids_are_numeric_timestamps() {
        let id = new_item_id();
        let millis: i64 = id.parse().unwrap();
        assert!(millis >= Utc::now().timestamp_millis() - 60_000);
    }
}
