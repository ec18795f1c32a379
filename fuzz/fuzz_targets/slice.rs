#![no_main]

use libfuzzer_sys::fuzz_target;
use pystr::{CharUnit, NormalizedRange, StrConfig, Text};

fuzz_target!(|data: &[u8]| {
    // First 4 bytes pick the slice bounds, the rest is the text (ignore invalid UTF-8)
    let Some((head, rest)) = data.split_first_chunk::<4>() else {
        return;
    };
    let Ok(s) = std::str::from_utf8(rest) else {
        return;
    };
    let bound = |b: u8| (b != 0x80).then_some(i64::from(b as i8));
    let (start, end, step) = (bound(head[0]), bound(head[1]), bound(head[2]));
    let unit = if head[3] & 1 == 0 { CharUnit::Scalar } else { CharUnit::Grapheme };

    let text = Text::with_config(s, StrConfig::new().with_unit(unit));
    match text.slice(start, end, step) {
        Ok(sliced) => {
            let range = NormalizedRange::resolve(start, end, step, text.len() as i64).expect("non-zero step");
            assert!(sliced.len() <= s.len());
            assert!(range.len() <= text.len());
        }
        Err(_) => assert_eq!(step, Some(0)),
    }

    if let Some(index) = start {
        let _ = text.getitem(index);
    }
    let _ = text.split(None, end);
    let _ = text.count("", start, end);
});
