#![no_main]
use libfuzzer_sys::fuzz_target;

use read_brfnt::RfntRef;

fuzz_target!(|data: &[u8]| {
    if let Ok(font) = RfntRef::new(data) {
        if let Ok(tglp) = font.tglp() {
            let _ = tglp.geometry().cells_per_sheet();
        }
        let _ = font.glyph_map();
    };
});
