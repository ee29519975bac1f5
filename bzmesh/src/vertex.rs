use vector3::Vector3f64;

pub const N_PHONON_MODES: usize = 8;

// Electron-phonon scattering rates of one band, indexed by `PhononMode`.
pub type PhononRates = [f64; N_PHONON_MODES];

// Absorption (A) or emission (E) of a longitudinal/transverse,
// optical/acoustic phonon. The discriminant is the slot in `PhononRates`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PhononMode {
    ALO = 0,
    ALA = 1,
    ATO = 2,
    ATA = 3,
    ELO = 4,
    ELA = 5,
    ETO = 6,
    ETA = 7,
}

impl PhononMode {
    pub const ALL: [PhononMode; N_PHONON_MODES] = [
        PhononMode::ALO,
        PhononMode::ALA,
        PhononMode::ATO,
        PhononMode::ATA,
        PhononMode::ELO,
        PhononMode::ELA,
        PhononMode::ETO,
        PhononMode::ETA,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_absorption(self) -> bool {
        self.index() < 4
    }

    pub fn label(self) -> &'static str {
        match self {
            PhononMode::ALO => "ALO",
            PhononMode::ALA => "ALA",
            PhononMode::ATO => "ATO",
            PhononMode::ATA => "ATA",
            PhononMode::ELO => "ELO",
            PhononMode::ELA => "ELA",
            PhononMode::ETO => "ETO",
            PhononMode::ETA => "ETA",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VertexError {
    #[error("band index {index} out of range (vertex holds {n_bands} band energies)")]
    BandIndexOutOfRange { index: usize, n_bands: usize },

    #[error("band index {index} out of range (vertex holds rates for {n_bands} bands)")]
    RateIndexOutOfRange { index: usize, n_bands: usize },
}

// One k-point of the Brillouin-zone mesh.
//
// The position is in units of 2pi/a. Band energies (eV, ascending) and
// electron-phonon rates are co-indexed by band but filled independently:
// energies by the mesh evaluation, rates by an external transport code.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshVertex {
    index: usize,
    position: Vector3f64,
    band_energies: Vec<f64>,
    electron_phonon_rates: Vec<PhononRates>,
}

impl MeshVertex {
    pub fn new(index: usize, position: Vector3f64) -> MeshVertex {
        MeshVertex {
            index,
            position,
            band_energies: Vec::new(),
            electron_phonon_rates: Vec::new(),
        }
    }

    pub fn get_index(&self) -> usize {
        self.index
    }

    pub fn get_position(&self) -> Vector3f64 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector3f64) {
        self.position = position;
    }

    pub fn shift_position(&mut self, shift: Vector3f64) {
        self.position += shift;
    }

    pub fn add_band_energy_value(&mut self, energy: f64) {
        self.band_energies.push(energy);
    }

    // Only existing entries can be overwritten; the sequence never grows here.
    pub fn set_band_energy(&mut self, band: usize, energy: f64) -> Result<(), VertexError> {
        if band >= self.band_energies.len() {
            return Err(VertexError::BandIndexOutOfRange {
                index: band,
                n_bands: self.band_energies.len(),
            });
        }

        self.band_energies[band] = energy;

        Ok(())
    }

    pub fn get_number_bands(&self) -> usize {
        self.band_energies.len()
    }

    pub fn get_energy_at_band(&self, band: usize) -> Option<f64> {
        self.band_energies.get(band).copied()
    }

    pub fn get_band_energies(&self) -> &[f64] {
        &self.band_energies
    }

    pub fn shift_band_energies(&mut self, delta: f64) {
        for e in self.band_energies.iter_mut() {
            *e += delta;
        }
    }

    // Drops the energies and the rates computed from them.
    pub fn clear_band_energies(&mut self) {
        self.band_energies.clear();
        self.electron_phonon_rates.clear();
    }

    pub fn add_electron_phonon_rates(&mut self, rates: PhononRates) {
        self.electron_phonon_rates.push(rates);
    }

    pub fn set_electron_phonon_rates(&mut self, band: usize, rates: PhononRates) -> Result<(), VertexError> {
        if band >= self.electron_phonon_rates.len() {
            return Err(VertexError::RateIndexOutOfRange {
                index: band,
                n_bands: self.electron_phonon_rates.len(),
            });
        }

        self.electron_phonon_rates[band] = rates;

        Ok(())
    }

    pub fn get_electron_phonon_rates(&self, band: usize) -> Option<&PhononRates> {
        self.electron_phonon_rates.get(band)
    }

    pub fn get_electron_phonon_rate(&self, band: usize, mode: PhononMode) -> Option<f64> {
        self.electron_phonon_rates.get(band).map(|r| r[mode.index()])
    }

    pub fn get_electron_phonon_rates_all_bands(&self) -> &[PhononRates] {
        &self.electron_phonon_rates
    }

    // total scattering rate of one band, summed over all eight channels
    pub fn get_total_electron_phonon_rate(&self, band: usize) -> Option<f64> {
        self.electron_phonon_rates.get(band).map(|r| r.iter().sum())
    }
}
