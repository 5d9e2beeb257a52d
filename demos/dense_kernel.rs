use numkern::config::{Dim, StatsOptions};
use numkern::core::Operand;
use numkern::matrix::DenseMat;
use numkern::solver::{LinearSolver, LuSolver};
use numkern::{covariance, determinant, inverse, lu, matmul, mean_of, Normalization};
use rand::Rng;

fn main() {
    let n = 5;
    // diagonally dominant random matrix
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let mut a = DenseMat::from_vec(n, n, data).unwrap();
    for i in 0..n {
        a[(i, i)] += n as f64;
    }

    let f = lu(a.view());
    println!("pivot = {:?}, sign = {}, flags = {:?}", f.pivot(), f.sign(), f.flags());
    println!("det(A) = {}", determinant(a.view()).unwrap());

    let inv = inverse(a.view()).unwrap();
    let eye = matmul(a.view(), inv.view()).unwrap();
    println!("A * inv(A) = {:?}", eye.to_rows());

    let b: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    let mut x = vec![0.0; n];
    let mut lus = LuSolver::new();
    let stats = lus.solve(&a, &b, &mut x).unwrap();
    println!("LU x = {:?}, stats = {:?}", x, stats);

    let cov = covariance(a.view(), Normalization::Sample).unwrap();
    println!("cov(A) = {:?}", cov.to_rows());
    let row_means = mean_of(Operand::Grid(a.view()), &StatsOptions::default().with_dim(Dim::Rows)).unwrap();
    println!("row means = {:?}", row_means.to_vec());
}
