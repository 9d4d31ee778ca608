#![no_main]
use log2_estimator_hater::SelectedSubject;
use log_hater::Probe;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|probes: Vec<Probe>| {
    let mut eval = log_hater::Evaluator::new(SelectedSubject::new());
    eval.evaluate(probes).unwrap();
});
