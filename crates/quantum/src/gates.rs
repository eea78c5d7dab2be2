use num_complex::Complex64;

pub type C64 = Complex64;

const ZERO: C64 = C64::new(0.0, 0.0);
const ONE: C64 = C64::new(1.0, 0.0);

pub fn hadamard() -> [[C64; 2]; 2] {
    let s = 1.0 / 2.0_f64.sqrt();
    [
        [C64::new(s, 0.0), C64::new(s, 0.0)],
        [C64::new(s, 0.0), C64::new(-s, 0.0)],
    ]
}

pub fn pauli_x() -> [[C64; 2]; 2] {
    [[ZERO, ONE], [ONE, ZERO]]
}

pub fn pauli_y() -> [[C64; 2]; 2] {
    let i = C64::new(0.0, 1.0);
    [[ZERO, -i], [i, ZERO]]
}

pub fn pauli_z() -> [[C64; 2]; 2] {
    [[ONE, ZERO], [ZERO, -ONE]]
}

/// diag(1, i)
pub fn phase_s() -> [[C64; 2]; 2] {
    [[ONE, ZERO], [ZERO, C64::new(0.0, 1.0)]]
}

/// diag(1, e^{iπ/4})
pub fn phase_t() -> [[C64; 2]; 2] {
    [[ONE, ZERO], [ZERO, C64::from_polar(1.0, std::f64::consts::FRAC_PI_4)]]
}

pub fn rx(theta: f64) -> [[C64; 2]; 2] {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [C64::new(c, 0.0), C64::new(0.0, -s)],
        [C64::new(0.0, -s), C64::new(c, 0.0)],
    ]
}

pub fn ry(theta: f64) -> [[C64; 2]; 2] {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [C64::new(c, 0.0), C64::new(-s, 0.0)],
        [C64::new(s, 0.0), C64::new(c, 0.0)],
    ]
}

pub fn rz(theta: f64) -> [[C64; 2]; 2] {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [[C64::new(c, -s), ZERO], [ZERO, C64::new(c, s)]]
}

/// |00>→|00>, |01>→|01>, |10>→|11>, |11>→|10>
pub fn cnot() -> [[C64; 4]; 4] {
    [
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE],
        [ZERO, ZERO, ONE, ZERO],
    ]
}

/// diag(1, 1, 1, -1)
pub fn cz() -> [[C64; 4]; 4] {
    [
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ZERO, ZERO, -ONE],
    ]
}

pub fn swap() -> [[C64; 4]; 4] {
    [
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE],
    ]
}
