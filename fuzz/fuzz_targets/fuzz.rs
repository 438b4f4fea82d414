#![no_main]
use libfuzzer_sys::fuzz_target;
use timelog::{DateTime, TimeLog};

#[inline(never)]
fn test_raw(raw: i64) {
    let timelog = TimeLog::from_raw(raw);
    let rendered = timelog::render(timelog);

    // Decoding is pure, so it must agree with itself and with render.
    let decoded = timelog::decode::<DateTime>(timelog);
    assert_eq!(decoded, timelog::decode::<DateTime>(raw));
    if let Some(date_time) = decoded {
        assert_eq!(timelog::encode(&date_time), timelog);
        assert_eq!(timelog::encode(&rendered), timelog);
        assert!(!rendered.contains('.'));
    } else {
        assert!(rendered.is_empty());
    }
}

#[inline(never)]
fn test_text(data: &[u8]) {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let timelog = timelog::encode(text);
    if !timelog.is_zero() {
        let rendered = timelog::render(timelog);
        assert_eq!(timelog::encode(&rendered), timelog);
    }
}

fuzz_target!(|data: &[u8]| {
    let [kind, data @ ..] = data else {
        return;
    };
    if kind % 2 == 0 {
        if let Ok(bytes) = <[u8; 8]>::try_from(data) {
            test_raw(i64::from_le_bytes(bytes));
        }
    } else {
        test_text(data);
    }
});
