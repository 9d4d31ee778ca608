#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use log_hater::ArbInput;

const MAX_VALUES: usize = 256;

#[derive(Clone, Debug)]
struct Args {
    values: Vec<u32>,
}

impl Arbitrary<'_> for Args {
    fn arbitrary(un: &mut Unstructured) -> arbitrary::Result<Args> {
        let len = usize::arbitrary(un)? % MAX_VALUES;
        let mut values = Vec::with_capacity(len);

        for _ in 0..len {
            // Mix boundary-biased inputs with raw ones.
            let v = match bool::arbitrary(un)? {
                true => ArbInput::arbitrary(un)?.0,
                false => u32::arbitrary(un)?,
            };
            values.push(v);
        }

        Ok(Args { values })
    }
}

fuzz_target!(|args: Args| {
    if let Some((kind, v)) = log2_estimator_hater::first_disagreement(&args.values) {
        panic!("{kind} disagrees with the exact logarithm at {v}");
    }
});
