use rand::{rngs::StdRng, Rng, SeedableRng};
use uuid::Uuid;

const MIME_TYPES: [&str; 4] = ["application/pdf", "image/png", "text/plain", "text/csv"];

#[derive(Clone, Debug)]
pub struct SampleRecord {
    pub id: Uuid,
    pub name: String,
    pub mime_type: &'static str,
    pub size: u64
}

pub fn generate_sample_records(count: usize) -> Vec<SampleRecord> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..count)
        .map(|index| SampleRecord {
            id: Uuid::new_v4(),
            name: format!("file-{index}"),
            mime_type: MIME_TYPES[rng.gen_range(0..MIME_TYPES.len())],
            size: rng.gen_range(0..1_048_576)
        })
        .collect()
}
