//! Fuzz target for both conversion directions
//!
//! Conversion is total: any UTF-8 input must convert without panicking, and
//! batch conversion must yield one output line per input line.

#![no_main]

use ferro_aa::{convert_batch, BatchConfig, Direction, StopSymbol};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Don't fuzz extremely long inputs - diminishing returns
        if input.len() > 4000 {
            return;
        }

        for direction in [Direction::ThreeToOne, Direction::OneToThree] {
            for stop in StopSymbol::ALL {
                let config = BatchConfig::new(direction).stop_symbol(stop);
                if let Ok(output) = convert_batch(input, &config) {
                    assert_eq!(output.total(), input.split('\n').count());
                }
            }
        }
    }
});
