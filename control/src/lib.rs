use epmconsts::*;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("cannot read control file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected 'key = value', got '{text}'")]
    Syntax { line: usize, text: String },

    #[error("line {line}: unknown parameter '{key}'")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: invalid value '{value}' for '{key}'")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },

    #[error("parameter '{key}' out of range: {reason}")]
    OutOfRange { key: String, reason: String },
}

// Run parameters of a band-structure evaluation, read from a `key = value`
// file. Energies are in eV, lengths in angstrom.
#[derive(Debug, Clone)]
pub struct Control {
    verbosity: String,
    material: String,
    lattice_constant: Option<f64>,
    basis_max_g2: u32,
    nband: usize,
    eigen_solver: String, // dense, jacobi
    eigval_epsilon: f64,
    eigen_max_iter: usize,
    num_threads: usize,
}

impl Default for Control {
    fn default() -> Self {
        Control {
            verbosity: "normal".to_string(),
            material: "Si".to_string(),
            lattice_constant: None,
            basis_max_g2: 11,
            nband: 8,
            eigen_solver: "dense".to_string(),
            eigval_epsilon: EPS12,
            eigen_max_iter: 0,
            num_threads: 0,
        }
    }
}

impl Control {
    pub fn new() -> Control {
        Control::default()
    }

    pub fn get_verbosity(&self) -> &str {
        &self.verbosity
    }

    pub fn is_verbose(&self) -> bool {
        "high" == self.get_verbosity()
    }

    pub fn get_material(&self) -> &str {
        &self.material
    }

    pub fn set_material(&mut self, material: &str) {
        self.material = material.to_string();
    }

    pub fn get_lattice_constant(&self) -> Option<f64> {
        self.lattice_constant
    }

    pub fn set_lattice_constant(&mut self, lattice_constant: Option<f64>) {
        self.lattice_constant = lattice_constant;
    }

    pub fn get_basis_max_g2(&self) -> u32 {
        self.basis_max_g2
    }

    pub fn set_basis_max_g2(&mut self, max_g2: u32) {
        self.basis_max_g2 = max_g2;
    }

    pub fn get_nband(&self) -> usize {
        self.nband
    }

    pub fn set_nband(&mut self, nband: usize) {
        self.nband = nband;
    }

    pub fn get_eigen_solver(&self) -> &str {
        &self.eigen_solver
    }

    pub fn set_eigen_solver(&mut self, scheme: &str) {
        self.eigen_solver = scheme.to_string();
    }

    pub fn get_eigval_epsilon(&self) -> f64 {
        self.eigval_epsilon
    }

    pub fn get_eigen_max_iter(&self) -> usize {
        self.eigen_max_iter
    }

    pub fn set_eigen_max_iter(&mut self, max_iter: usize) {
        self.eigen_max_iter = max_iter;
    }

    pub fn get_num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn set_num_threads(&mut self, n: usize) {
        self.num_threads = n;
    }

    pub fn read_file<P: AsRef<Path>>(&mut self, inpfile: P) -> Result<(), ControlError> {
        let path = inpfile.as_ref();

        let io_err = |source| ControlError::Io {
            path: path.display().to_string(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;

        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .map_err(io_err)?;

        self.parse_lines(lines.iter().map(|x| x.as_str()))
    }

    pub fn parse_str(&mut self, text: &str) -> Result<(), ControlError> {
        self.parse_lines(text.lines())
    }

    fn parse_lines<'a>(&mut self, lines: impl Iterator<Item = &'a str>) -> Result<(), ControlError> {
        for (iline, raw) in lines.enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();

            if line.is_empty() {
                continue;
            }

            let s: Vec<&str> = line.splitn(2, '=').map(|x| x.trim()).collect();

            if s.len() != 2 || s[0].is_empty() || s[1].is_empty() {
                return Err(ControlError::Syntax {
                    line: iline + 1,
                    text: raw.to_string(),
                });
            }

            let (key, value) = (s[0], s[1]);
            let lineno = iline + 1;

            match key {
                "verbosity" => {
                    self.verbosity = value.to_string();
                }

                "material" => {
                    self.material = value.to_string();
                }

                "lattice_constant" => {
                    self.lattice_constant = Some(parse_value(lineno, key, value)?);
                }

                "basis_max_g2" => {
                    self.basis_max_g2 = parse_value(lineno, key, value)?;
                }

                "nband" => {
                    self.nband = parse_value(lineno, key, value)?;
                }

                "eigen_solver" => {
                    self.eigen_solver = value.to_string();
                }

                "eigval_epsilon" => {
                    self.eigval_epsilon = parse_value(lineno, key, value)?;
                }

                "eigen_max_iter" => {
                    self.eigen_max_iter = parse_value(lineno, key, value)?;
                }

                "num_threads" => {
                    self.num_threads = parse_value(lineno, key, value)?;
                }

                _ => {
                    return Err(ControlError::UnknownKey {
                        line: lineno,
                        key: key.to_string(),
                    });
                }
            }
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<(), ControlError> {
        if self.nband == 0 {
            return Err(out_of_range("nband", "at least one band is required"));
        }

        if let Some(a) = self.lattice_constant {
            if !(a.is_finite() && a > 0.0) {
                return Err(out_of_range("lattice_constant", "must be a positive length"));
            }
        }

        if !(self.eigval_epsilon.is_finite() && self.eigval_epsilon > 0.0) {
            return Err(out_of_range("eigval_epsilon", "must be positive"));
        }

        if self.verbosity != "normal" && self.verbosity != "high" {
            return Err(out_of_range("verbosity", "expected 'normal' or 'high'"));
        }

        Ok(())
    }

    pub fn display(&self) {
        println!("   {:-^80}", " control parameters ");
        println!();

        println!(
            "   {:<width1$} = {:>width2$}",
            "material",
            self.get_material(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        match self.get_lattice_constant() {
            Some(a) => println!(
                "   {:<width1$} = {:>width2$.6} A",
                "lattice_constant",
                a,
                width1 = OUT_WIDTH1,
                width2 = OUT_WIDTH2
            ),
            None => println!(
                "   {:<width1$} = {:>width2$}",
                "lattice_constant",
                "material",
                width1 = OUT_WIDTH1,
                width2 = OUT_WIDTH2
            ),
        }

        println!(
            "   {:<width1$} = {:>width2$}",
            "basis_max_g2",
            self.get_basis_max_g2(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$}",
            "nband",
            self.get_nband(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$}",
            "eigen_solver",
            self.get_eigen_solver(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$.3E}",
            "eigval_epsilon",
            self.get_eigval_epsilon(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$}",
            "eigen_max_iter",
            self.get_eigen_max_iter(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$}",
            "num_threads",
            self.get_num_threads(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!();
    }
}

fn parse_value<T: FromStr>(line: usize, key: &str, value: &str) -> Result<T, ControlError> {
    value.parse::<T>().map_err(|_| ControlError::InvalidValue {
        line,
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn out_of_range(key: &str, reason: &str) -> ControlError {
    ControlError::OutOfRange {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
