// third-party imports
use criterion::criterion_main;

const ND: &str = ":"; // name delimiter

mod matching;

criterion_main!(matching::benches);
