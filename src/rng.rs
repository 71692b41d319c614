// Small LCG for layout values that must replay identically across runs and
// machines. Statistical quality is irrelevant here; bit-exact replay is the
// whole point.
#[derive(Copy, Clone, Debug)]
pub struct SequenceRng { state: u32 }

const MULTIPLIER: u32 = 9301;
const INCREMENT: u32 = 49297;
const MODULUS: u32 = 233280;

impl SequenceRng {
    // Reducing the seed mod m up front is congruent with feeding it in raw,
    // and keeps every later multiply inside u32 range.
    pub fn new(seed: u32) -> Self { Self { state: seed % MODULUS } }

    pub fn next_state(&mut self) -> u32 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state
    }

    pub fn next_f32(&mut self) -> f32 { self.next_state() as f32 / MODULUS as f32 }
}
