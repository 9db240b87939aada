//! The simulator: a cube, its profile's moves, and a history of sequences.

use im::Vector;
use log::{debug, warn};

use super::scramble::ScrambleRng;
use crate::core::{Cube, CubeError, SimulatorConfig};
use crate::notation::{parse_moves, MoveAlphabet, MoveSequence};
use crate::profiles::Profile;

/// Drives one cube through named moves.
///
/// ## Atomicity
///
/// Every mutating call either succeeds completely or leaves the cube and
/// history as they were. Move strings are parsed in full before anything is
/// performed, and sequences run on a scratch copy that replaces the cube
/// only on success.
///
/// ## History
///
/// Each successful, non-empty `perform_*` call is one history entry (when
/// recording is on). `undo` pops the latest entry and performs its inverse
/// without recording it. Scrambles are never recorded.
///
/// ```
/// use cube_sim::profiles::Cube3x3;
/// use cube_sim::Simulator;
///
/// let mut sim = Simulator::with_profile(&Cube3x3).unwrap();
/// sim.perform_moves("R U R' U'").unwrap();
/// assert!(!sim.cube().is_solved());
///
/// sim.undo().unwrap();
/// assert!(sim.cube().is_solved());
/// ```
#[derive(Clone, Debug)]
pub struct Simulator {
    cube: Cube,
    alphabet: MoveAlphabet,
    history: Vector<MoveSequence>,
    rng: ScrambleRng,
    config: SimulatorConfig,
    scramble_move_count: usize,
}

impl Simulator {
    /// Create a simulator with a solved cube for the given profile.
    ///
    /// Fails if the profile's size is zero or any of its moves names a
    /// slice the cube doesn't have.
    pub fn new<P: Profile + ?Sized>(profile: &P, config: SimulatorConfig) -> Result<Self, CubeError> {
        let rng = ScrambleRng::new(config.seed);
        Self::with_rng(profile, config, rng)
    }

    /// Create a simulator that scrambles from `rng` instead of one seeded
    /// from `config.seed`.
    pub fn with_rng<P: Profile + ?Sized>(
        profile: &P,
        config: SimulatorConfig,
        rng: ScrambleRng,
    ) -> Result<Self, CubeError> {
        let cube = Cube::new(profile.size())?;
        let alphabet = profile.alphabet();
        alphabet.validate(cube.size())?;

        let scramble_move_count = config
            .scramble_move_count
            .unwrap_or_else(|| profile.scramble_move_count());

        debug!("simulator: size={} moves={}", cube.size(), alphabet.len());

        Ok(Self {
            cube,
            alphabet,
            history: Vector::new(),
            rng,
            config,
            scramble_move_count,
        })
    }

    /// Create a simulator with the default configuration.
    pub fn with_profile<P: Profile + ?Sized>(profile: &P) -> Result<Self, CubeError> {
        Self::new(profile, SimulatorConfig::default())
    }

    // === Accessors ===

    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cube.size()
    }

    /// Move symbols in the profile's order.
    #[must_use]
    pub fn moves(&self) -> Vec<char> {
        self.alphabet.symbols().collect()
    }

    #[must_use]
    pub fn alphabet(&self) -> &MoveAlphabet {
        &self.alphabet
    }

    /// Recorded sequences, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveSequence> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.config.record_history
    }

    /// Turn recording of performed sequences on or off. Existing history is
    /// kept either way.
    pub fn set_recording(&mut self, record: bool) {
        self.config.record_history = record;
    }

    // === Moves ===

    /// Parse and perform a move string such as `"R U R' U'"`.
    ///
    /// Returns the sequence that was performed.
    pub fn perform_moves(&mut self, input: &str) -> Result<MoveSequence, CubeError> {
        let sequence = parse_moves(&self.alphabet, input).map_err(|err| {
            warn!("rejected moves {:?}: {}", input, err);
            err
        })?;
        self.perform_sequence(&sequence)?;
        Ok(sequence)
    }

    /// Perform an already-built sequence, recording it if enabled.
    pub fn perform_sequence(&mut self, sequence: &MoveSequence) -> Result<(), CubeError> {
        self.execute(sequence)?;
        debug!("performed {}", sequence);

        if self.config.record_history && !sequence.is_empty() {
            self.history.push_back(sequence.clone());
        }
        Ok(())
    }

    /// Undo the most recently recorded sequence.
    ///
    /// Returns the sequence that was undone.
    pub fn undo(&mut self) -> Result<MoveSequence, CubeError> {
        let last = self.history.last().cloned().ok_or(CubeError::EmptyHistory)?;
        self.execute(&last.inverse())?;
        self.history.pop_back();
        debug!("undid {}", last);
        Ok(last)
    }

    /// Scramble with the configured number of random moves.
    pub fn scramble(&mut self) -> Result<MoveSequence, CubeError> {
        self.scramble_with(self.scramble_move_count)
    }

    /// Scramble with `count` random moves. Returns the moves performed.
    pub fn scramble_with(&mut self, count: usize) -> Result<MoveSequence, CubeError> {
        let sequence = self.rng.scramble(&self.alphabet, count);
        self.execute(&sequence)?;
        debug!("scrambled with {}", sequence);
        Ok(sequence)
    }

    /// Solve the cube by fiat and forget the history.
    pub fn reset(&mut self) {
        self.cube.reset();
        self.history.clear();
        debug!("reset");
    }

    /// Replace the cube with another of the same size, forgetting history.
    pub fn load_cube(&mut self, cube: Cube) -> Result<(), CubeError> {
        if cube.size() != self.size() {
            return Err(CubeError::SizeMismatch {
                expected: self.size(),
                actual: cube.size(),
            });
        }
        self.cube = cube;
        self.history.clear();
        debug!("loaded {}", self.cube);
        Ok(())
    }

    fn execute(&mut self, sequence: &MoveSequence) -> Result<(), CubeError> {
        let mut scratch = self.cube.clone();
        for token in sequence {
            self.alphabet.apply(&mut scratch, *token)?;
        }
        self.cube = scratch;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{Cube3x3, OuterFaces};

    fn sim() -> Simulator {
        Simulator::with_profile(&Cube3x3).unwrap()
    }

    #[test]
    fn test_new_simulator() {
        let sim = sim();
        assert_eq!(sim.size(), 3);
        assert!(sim.cube().is_solved());
        assert!(sim.history().is_empty());
        assert!(sim.is_recording());
        assert_eq!(sim.moves().len(), 18);
    }

    #[test]
    fn test_zero_size_profile_rejected() {
        assert_eq!(
            Simulator::with_profile(&OuterFaces::new(0)).unwrap_err(),
            CubeError::InvalidSize(0)
        );
    }

    #[test]
    fn test_perform_records_history() {
        let mut sim = sim();
        let performed = sim.perform_moves("R U2").unwrap();
        assert_eq!(performed.to_string(), "R U2");
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.history()[0], performed);
    }

    #[test]
    fn test_empty_input_not_recorded() {
        let mut sim = sim();
        sim.perform_moves("  ").unwrap();
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_recording_disabled() {
        let mut sim = Simulator::new(&Cube3x3, SimulatorConfig::default().with_recording(false)).unwrap();
        sim.perform_moves("R").unwrap();
        assert!(sim.history().is_empty());
        assert_eq!(sim.undo(), Err(CubeError::EmptyHistory));
        assert!(!sim.cube().is_solved());

        sim.set_recording(true);
        sim.perform_moves("U").unwrap();
        assert_eq!(sim.history().len(), 1);
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let mut sim = sim();
        sim.perform_moves("F").unwrap();
        let after_first = sim.cube().clone();
        sim.perform_moves("R U' B2").unwrap();

        let undone = sim.undo().unwrap();
        assert_eq!(undone.to_string(), "R U' B2");
        assert_eq!(sim.cube(), &after_first);

        sim.undo().unwrap();
        assert!(sim.cube().is_solved());
        assert_eq!(sim.undo(), Err(CubeError::EmptyHistory));
    }

    #[test]
    fn test_failed_parse_is_atomic() {
        let mut sim = sim();
        sim.perform_moves("R").unwrap();
        let before = sim.cube().clone();

        assert_eq!(sim.perform_moves("U F Q"), Err(CubeError::UnknownMoveSymbol('Q')));
        assert_eq!(sim.cube(), &before);
        assert_eq!(sim.history().len(), 1);

        assert_eq!(sim.perform_moves("U2'"), Err(CubeError::DanglingModifier('\'')));
        assert_eq!(sim.cube(), &before);
    }

    #[test]
    fn test_scramble_not_recorded() {
        let mut sim = sim();
        let scramble = sim.scramble().unwrap();
        assert_eq!(scramble.len(), 22);
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_scramble_count_override() {
        let config = SimulatorConfig::default().with_scramble_move_count(4);
        let mut sim = Simulator::new(&Cube3x3, config).unwrap();
        assert_eq!(sim.scramble().unwrap().len(), 4);
        assert_eq!(sim.scramble_with(0).unwrap().len(), 0);
    }

    #[test]
    fn test_scramble_is_reproducible() {
        let mut a = Simulator::new(&Cube3x3, SimulatorConfig::default().with_seed(99)).unwrap();
        let mut b = Simulator::new(&Cube3x3, SimulatorConfig::default().with_seed(99)).unwrap();
        assert_eq!(a.scramble().unwrap(), b.scramble().unwrap());
        assert_eq!(a.cube(), b.cube());
    }

    #[test]
    fn test_injected_rng_drives_scrambles() {
        let config = SimulatorConfig::default().with_seed(1);
        let mut injected = Simulator::with_rng(&Cube3x3, config.clone(), ScrambleRng::new(500)).unwrap();
        let mut seeded = Simulator::new(&Cube3x3, config.with_seed(500)).unwrap();
        assert_eq!(injected.scramble().unwrap(), seeded.scramble().unwrap());

        let expected = ScrambleRng::new(500).scramble(&Cube3x3.alphabet(), 44);
        let mut fresh = Simulator::with_rng(&Cube3x3, SimulatorConfig::default(), ScrambleRng::new(500)).unwrap();
        assert_eq!(fresh.scramble_with(44).unwrap(), expected);
    }

    #[test]
    fn test_scramble_matches_replay() {
        let mut sim = sim();
        let scramble = sim.scramble().unwrap();

        let mut replay = Simulator::with_profile(&Cube3x3).unwrap();
        replay.perform_sequence(&scramble).unwrap();
        assert_eq!(replay.cube(), sim.cube());
    }

    #[test]
    fn test_reset_clears_history() {
        let mut sim = sim();
        sim.perform_moves("R U").unwrap();
        sim.reset();
        assert!(sim.cube().is_solved());
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_load_cube() {
        let mut sim = sim();
        sim.perform_moves("R").unwrap();

        let checkerboard: Cube = "GBGBGBGBGRORORORORBGBGBGBGBOROROROROWYWYWYWYWYWYWYWYWY"
            .parse()
            .unwrap();
        sim.load_cube(checkerboard.clone()).unwrap();
        assert_eq!(sim.cube(), &checkerboard);
        assert!(sim.history().is_empty());

        assert_eq!(
            sim.load_cube(Cube::new(2).unwrap()),
            Err(CubeError::SizeMismatch { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn test_clone_shares_nothing_mutable() {
        let mut sim = sim();
        sim.perform_moves("R").unwrap();
        let snapshot = sim.clone();
        sim.perform_moves("U").unwrap();
        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(sim.history().len(), 2);
        assert_ne!(snapshot.cube(), sim.cube());
    }
}
