use crate::truncation::Truncation;
use faer::Mat;
use num_complex::Complex64;

pub type C64 = Complex64;

/// Site tensor indexed as (left bond, physical, right bond).
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor3 {
    pub data: Vec<C64>,
    pub dl: usize,
    pub dp: usize,
    pub dr: usize,
}

impl Tensor3 {
    pub fn zeros(dl: usize, dp: usize, dr: usize) -> Self {
        Self {
            data: vec![C64::new(0.0, 0.0); dl * dp * dr],
            dl,
            dp,
            dr,
        }
    }

    #[inline]
    fn idx(&self, l: usize, p: usize, r: usize) -> usize {
        (l * self.dp + p) * self.dr + r
    }

    pub fn get(&self, l: usize, p: usize, r: usize) -> C64 {
        self.data[self.idx(l, p, r)]
    }

    pub fn set(&mut self, l: usize, p: usize, r: usize, v: C64) {
        let i = self.idx(l, p, r);
        self.data[i] = v;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MPS {
    pub sites: Vec<Tensor3>,
}

/// |00>→|00>, |01>→|10>, |10>→|01>, |11>→|11>
fn swap_matrix() -> [[C64; 4]; 4] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [
        [o, z, z, z],
        [z, z, o, z],
        [z, o, z, z],
        [z, z, z, o],
    ]
}

/// Exchanges the tensor factors of a two-qubit operator: U' = SWAP·U·SWAP.
fn exchange_factors(u: [[C64; 4]; 4]) -> [[C64; 4]; 4] {
    let mut out = [[C64::new(0.0, 0.0); 4]; 4];
    for p1 in 0..2 {
        for p2 in 0..2 {
            for q1 in 0..2 {
                for q2 in 0..2 {
                    out[p2 * 2 + p1][q2 * 2 + q1] = u[p1 * 2 + p2][q1 * 2 + q2];
                }
            }
        }
    }
    out
}

impl MPS {
    pub fn new_zero(n: usize) -> Self {
        let mut sites = Vec::with_capacity(n);
        for _ in 0..n {
            let mut t = Tensor3::zeros(1, 2, 1);
            t.set(0, 0, 0, C64::new(1.0, 0.0));
            sites.push(t);
        }
        Self { sites }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn apply_1q(&mut self, k: usize, u: [[C64; 2]; 2]) {
        let s = &self.sites[k];
        let mut out = Tensor3::zeros(s.dl, s.dp, s.dr);

        for l in 0..s.dl {
            for r in 0..s.dr {
                for p in 0..2 {
                    let mut acc = C64::new(0.0, 0.0);
                    for pp in 0..2 {
                        acc += u[p][pp] * s.get(l, pp, r);
                    }
                    out.set(l, p, r, acc);
                }
            }
        }
        self.sites[k] = out;
    }

    /// Applies `u` to the adjacent pair (k, k+1); row index of `u` is
    /// `p_k * 2 + p_{k+1}`.
    pub fn apply_2q_svd(&mut self, k: usize, u: [[C64; 4]; 4], trunc: Truncation) {
        let a = &self.sites[k];
        let b = &self.sites[k + 1];

        let dl = a.dl;
        let dr = b.dr;
        let chi = a.dr;

        let mut theta = Mat::<C64>::zeros(dl * 2, 2 * dr);

        for l in 0..dl {
            for m in 0..chi {
                for r in 0..dr {
                    for p1 in 0..2 {
                        for p2 in 0..2 {
                            let mut v = C64::new(0.0, 0.0);
                            for q1 in 0..2 {
                                for q2 in 0..2 {
                                    let i = p1 * 2 + p2;
                                    let j = q1 * 2 + q2;
                                    v += u[i][j] * a.get(l, q1, m) * b.get(m, q2, r);
                                }
                            }
                            let row = l * 2 + p1;
                            let col = p2 * dr + r;
                            let cur = theta.read(row, col);
                            theta.write(row, col, cur + v);
                        }
                    }
                }
            }
        }

        let svd = theta.thin_svd();
        let s = svd.s_diagonal();

        let mut kept = 0;
        for i in 0..s.nrows() {
            let sv = s.read(i).re;
            if sv > trunc.cutoff && kept < trunc.max_bond {
                kept += 1;
            }
        }
        if kept == 0 {
            kept = 1;
        }

        let u_full = svd.u();
        let v_full = svd.v();
        let u_mat = u_full.submatrix(0, 0, u_full.nrows(), kept);
        let v_mat = v_full.submatrix(0, 0, v_full.nrows(), kept);

        let mut new_a = Tensor3::zeros(dl, 2, kept);
        for l in 0..dl {
            for p in 0..2 {
                for m in 0..kept {
                    let u_val = u_mat.read(l * 2 + p, m);
                    new_a.set(l, p, m, u_val * s.read(m).re);
                }
            }
        }

        let mut new_b = Tensor3::zeros(kept, 2, dr);
        for m in 0..kept {
            for p in 0..2 {
                for r in 0..dr {
                    new_b.set(m, p, r, v_mat.read(p * dr + r, m).conj());
                }
            }
        }

        self.sites[k] = new_a;
        self.sites[k + 1] = new_b;
    }

    /// Applies `u` with its first factor on qubit `a` and its second on
    /// qubit `b`. Non-adjacent pairs are brought together with SWAPs and
    /// moved back afterwards.
    pub fn apply_2q(&mut self, a: usize, b: usize, u: [[C64; 4]; 4], trunc: Truncation) {
        assert!(a != b, "apply_2q needs two distinct sites");
        let (lo, hi, u) = if a < b {
            (a, b, u)
        } else {
            (b, a, exchange_factors(u))
        };

        for k in (lo + 1..hi).rev() {
            self.apply_2q_svd(k, swap_matrix(), trunc);
        }
        self.apply_2q_svd(lo, u, trunc);
        for k in lo + 1..hi {
            self.apply_2q_svd(k, swap_matrix(), trunc);
        }
    }

    /// ⟨self|other⟩ via left-to-right transfer matrices.
    pub fn overlap(&self, other: &MPS) -> C64 {
        assert!(
            self.sites.len() == other.sites.len(),
            "overlap needs states of equal length"
        );

        // env[la * dl_b + lb]
        let mut env = vec![C64::new(1.0, 0.0)];
        for (a, b) in self.sites.iter().zip(&other.sites) {
            let mut next = vec![C64::new(0.0, 0.0); a.dr * b.dr];
            for la in 0..a.dl {
                for lb in 0..b.dl {
                    let e = env[la * b.dl + lb];
                    if e == C64::new(0.0, 0.0) {
                        continue;
                    }
                    for p in 0..a.dp {
                        for ra in 0..a.dr {
                            let av = a.get(la, p, ra).conj() * e;
                            for rb in 0..b.dr {
                                next[ra * b.dr + rb] += av * b.get(lb, p, rb);
                            }
                        }
                    }
                }
            }
            env = next;
        }

        env.iter().copied().sum()
    }

    pub fn norm_sqr(&self) -> f64 {
        self.overlap(self).re
    }
}
