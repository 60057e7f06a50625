use crate::train::Trainer;

/// The fixed prediction batch: the four XOR inputs in truth-table order.
pub const XOR_INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];

/// Runs the trained model forward on all four XOR inputs and prints each
/// input with its rounded and raw prediction. Pure read of the current
/// parameter state; repeated calls print identical values.
pub fn print_predictions(trainer: &Trainer) {
    println!();
    println!("Prediction");

    for input in &XOR_INPUTS {
        let output = trainer.forward(input);
        let rendered: Vec<String> = output
            .iter()
            .map(|v| format!("{} ~ {:.6}", v.round(), v))
            .collect();
        println!("[{} {}] => {}", input[0], input[1], rendered.join(" "));
    }
}
