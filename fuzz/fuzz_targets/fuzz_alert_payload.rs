//! Fuzz target: `AlertMessage::lines`
//!
//! Renders the alert for arbitrary temperature bit patterns (NaN,
//! infinities, subnormals) and both flame states. Rendering must never
//! fail and the temperature line must agree with `whole_degrees`.
//!
//! cargo fuzz run fuzz_alert_payload

#![no_main]

use hazardwatch::notification::{AlertMessage, BANNER, LINE_CAP};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&flag, rest)) = data.split_first() else {
        return;
    };
    let mut bits = [0u8; 4];
    for (dst, src) in bits.iter_mut().zip(rest) {
        *dst = *src;
    }

    let msg = AlertMessage::new(flag & 1 == 1, f32::from_le_bytes(bits));
    let lines = msg.lines().expect("alert must always render");

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].as_str(), BANNER);
    assert!(lines.iter().all(|l| l.len() <= LINE_CAP));

    let degrees = lines[2]
        .strip_prefix("Temperature: ")
        .and_then(|s| s.strip_suffix('C'))
        .and_then(|s| s.parse::<i32>().ok());
    assert_eq!(degrees, Some(msg.whole_degrees()));
});
