use ndarray::array;
use power_method::{power_method, PowerMethodConfig};

fn main() {
    let a = array![[1.0, 2.0, 1.0], [1.0, 1.0, 2.0], [3.0, 1.0, 1.0]];

    println!("=== Power iteration vs dense eigen-solver ===");
    println!("Matrix A:\n{}", a);

    let x0 = array![1.0, 1.0, 1.0].into_dyn();
    let result = power_method(&a.clone().into_dyn(), Some(&x0), PowerMethodConfig::default())
        .expect("power iteration failed");

    println!("\nPower iteration eigenvalue: {:.12}", result.eigenvalue);
    println!("Eigenvector: {:.6}", result.eigenvector);

    // Reference: full eigen-decomposition via nalgebra
    let m = nalgebra::DMatrix::<f64>::from_row_slice(
        3,
        3,
        &[1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 3.0, 1.0, 1.0],
    );
    let eigenvalues = m.complex_eigenvalues();
    let reference = eigenvalues
        .iter()
        .max_by(|a, b| a.norm().total_cmp(&b.norm()))
        .map(|ev| ev.re)
        .unwrap();

    println!("Reference dominant eigenvalue: {:.12}", reference);

    let diff = (result.eigenvalue - reference).abs();
    println!("\nAbsolute difference: {:.2e}", diff);
    if diff < 1e-6 {
        println!("✓ Power iteration matches the reference solver");
    } else {
        println!("✗ Power iteration diverges from the reference solver");
    }
}
