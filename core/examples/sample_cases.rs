use recovery_core::wire::parse_cases;
use recovery_core::Reconstructor;

const SAMPLES: [&str; 2] = [
    include_str!("../../cli/samples/case1.json"),
    include_str!("../../cli/samples/case2.json"),
];

/// Reconstruct both sample cases and show which shares disagree with the
/// majority secret.
fn main() {
    let cases: Vec<_> = SAMPLES
        .iter()
        .flat_map(|sample| parse_cases(sample).expect("sample cases parse"))
        .collect();
    let reconstructor = Reconstructor::default();

    for (index, result) in reconstructor.reconstruct_all(&cases).iter().enumerate() {
        let result = result.as_ref().expect("sample cases reconstruct");
        println!("Test Case {} Secret: {}", index + 1, result.secret);
        if !result.is_clean() {
            let wrong: Vec<String> =
                result.outliers.iter().map(ToString::to_string).collect();
            println!("Test Case {} Wrong Points: {}", index + 1, wrong.join(" "));
        }
    }
}
