//! Ad hoc dump of one G1 addition vector in the Solidity test layout.
//!
//! Each 128-character coordinate is split into its two 64-character
//! (32-byte) halves and printed as a `"0x"`-prefixed JSON fragment line to
//! stdout, ready to paste into a Solidity test case. Not part of the
//! conversion pipeline.

/// Input column of the vector: two G1 points, four 128-character field
/// elements.
const INPUT: &str = "0000000000000000000000000000000012196c5a43d69224d8713389285f26b98f86ee910ab3dd668e413738282003cc5b7357af9a7af54bb713d62255e80f560000000000000000000000000000000006ba8102bfbeea4416b710c73e8cce3032c31c6269c44906f8ac4f7874ce99fb17559992486528963884ce429a992fee000000000000000000000000000000000001101098f5c39893765766af4512a0c74e1bb89bc7e6fdf14e3e7337d257cc0f94658179d83320b99f31ff94cd2bac0000000000000000000000000000000003e1a9f9f44ca2cdab4f43a1a3ee3470fdf90b2fc228eb3b709fcd72f014838ac82a6d797aeefed9a0804b22ed1ce8f7";

/// Expected column: the sum, two 128-character field elements.
const EXPECTED: &str = "000000000000000000000000000000001466e1373ae4a7e7ba885c5f0c3ccfa48cdb50661646ac6b779952f466ac9fc92730dcaed9be831cd1f8c4fefffd5209000000000000000000000000000000000c1fb750d2285d4ca0378e1e8cdbf6044151867c34a711b73ae818aee6dbe9e886f53d7928cc6ed9c851e0422f609b11";

const HALF_HEX: usize = 64;

fn half(blob: &str, index: usize) -> &str {
    blob.get(index * HALF_HEX..(index + 1) * HALF_HEX)
        .unwrap_or_default()
}

fn main() {
    let input_labels = [
        "p1X_a", "p1X_b", "p1Y_a", "p1Y_b", "p2X_a", "p2X_b", "p2Y_a", "p2Y_b",
    ];
    for (index, label) in input_labels.iter().enumerate() {
        println!("\"{label}\": \"0x{}\", ", half(INPUT, index));
    }

    println!("\"RSX_a\": \"0x{}\", ", half(EXPECTED, 0));
    println!("\"RSX_b\": \"0x{}\", ", half(EXPECTED, 1));
    println!("\"RSY_a\": \"0x{}\", ", half(EXPECTED, 2));
    println!("\"RSY_b\": \"0x{}\" ", half(EXPECTED, 3));
}
