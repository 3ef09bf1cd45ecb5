use std::f64::consts::PI;
use rand::Rng;

pub const PARTICLE_COUNT: usize = 900;
pub const EMBER_COUNT: usize = 70;
pub const MAX_DISTANCE: f64 = 620.0;

const ANGLE_JITTER: f64 = 0.08;
const SHARP_CHANCE: f64 = 0.65;
const SOFT_CORE_CHANCE: f64 = 0.35;
const EMBER_SPREAD: f64 = 120.0;

/// One dust particle of the burst. Times are seconds, lengths pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    /// Radians.
    pub angle: f64,
    pub distance: f64,
    pub start_delay: f64,
    pub size: f64,
    pub blur: f64,
    pub peak_opacity: f64,
    /// Degrees.
    pub rotation: f64,
    pub travel_duration: f64,
    pub soft_core: bool,
}

impl ParticleParams {
    pub fn target(&self) -> (f64, f64) {
        (self.angle.cos() * self.distance, self.angle.sin() * self.distance)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmberParams {
    pub offset_x: f64,
    pub offset_y: f64,
    pub delay: f64,
    pub size: f64,
    pub opacity: f64,
    pub duration: f64,
}

/// Particles spread evenly around the circle, each nudged and timed at random.
pub fn generate_particles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ParticleParams> {
    (0..count)
        .map(|i| {
            let base = i as f64 / count as f64 * PI * 2.0;
            let blur = if rng.gen_bool(SHARP_CHANCE) {
                0.0
            } else {
                rng.gen_range(0.5..2.8)
            };
            ParticleParams {
                angle: base + rng.gen_range(-ANGLE_JITTER..ANGLE_JITTER),
                distance: rng.gen_range(MAX_DISTANCE * 0.55..MAX_DISTANCE),
                start_delay: rng.gen_range(0.0..0.28),
                size: rng.gen_range(1.0..2.2),
                blur,
                peak_opacity: rng.gen_range(0.4..0.9),
                rotation: rng.gen_range(-55.0..55.0),
                travel_duration: rng.gen_range(3.2..5.0),
                soft_core: rng.gen_bool(SOFT_CORE_CHANCE),
            }
        })
        .collect()
}

pub fn generate_embers<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<EmberParams> {
    (0..count)
        .map(|_| EmberParams {
            offset_x: rng.gen_range(-EMBER_SPREAD..EMBER_SPREAD),
            offset_y: rng.gen_range(-EMBER_SPREAD..EMBER_SPREAD),
            delay: rng.gen_range(0.0..2.2),
            size: rng.gen_range(0.5..2.1),
            opacity: rng.gen_range(0.1..0.7),
            duration: rng.gen_range(3.8..6.0),
        })
        .collect()
}

/// Everything the overlay animates, drawn once per mount.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub particles: Vec<ParticleParams>,
    pub embers: Vec<EmberParams>,
}

impl ParticleField {
    pub fn new(particles: usize, embers: usize) -> Self {
        let mut rng = rand::thread_rng();
        Self::with_rng(particles, embers, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(particles: usize, embers: usize, rng: &mut R) -> Self {
        Self {
            particles: generate_particles(particles, rng),
            embers: generate_embers(embers, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn particles_stay_inside_their_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate_particles(PARTICLE_COUNT, &mut rng);
        assert_eq!(particles.len(), PARTICLE_COUNT);

        for (i, p) in particles.iter().enumerate() {
            let base = i as f64 / PARTICLE_COUNT as f64 * PI * 2.0;
            assert!((p.angle - base).abs() <= ANGLE_JITTER + 1e-9);
            assert!(p.distance >= MAX_DISTANCE * 0.55 && p.distance < MAX_DISTANCE);
            assert!((0.0..0.28).contains(&p.start_delay));
            assert!((1.0..2.2).contains(&p.size));
            assert!(p.blur == 0.0 || (0.5..2.8).contains(&p.blur));
            assert!((0.4..0.9).contains(&p.peak_opacity));
            assert!((-55.0..55.0).contains(&p.rotation));
            assert!((3.2..5.0).contains(&p.travel_duration));
        }
    }

    #[test]
    fn some_particles_are_blurred_and_some_sharp() {
        let mut rng = StdRng::seed_from_u64(11);
        let particles = generate_particles(PARTICLE_COUNT, &mut rng);
        let blurred = particles.iter().filter(|p| p.blur > 0.0).count();
        assert!(blurred > 200 && blurred < 450, "blurred = {}", blurred);
    }

    #[test]
    fn embers_stay_inside_their_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let embers = generate_embers(EMBER_COUNT, &mut rng);
        assert_eq!(embers.len(), EMBER_COUNT);
        for e in &embers {
            assert!((-120.0..120.0).contains(&e.offset_x));
            assert!((-120.0..120.0).contains(&e.offset_y));
            assert!((0.0..2.2).contains(&e.delay));
            assert!((0.5..2.1).contains(&e.size));
            assert!((0.1..0.7).contains(&e.opacity));
            assert!((3.8..6.0).contains(&e.duration));
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_particles(0, &mut rng).is_empty());
        assert!(generate_embers(0, &mut rng).is_empty());
    }

    #[test]
    fn two_fields_differ() {
        let first = ParticleField::new(PARTICLE_COUNT, EMBER_COUNT);
        let second = ParticleField::new(PARTICLE_COUNT, EMBER_COUNT);
        assert_ne!(first, second);
    }

    #[test]
    fn same_seed_reproduces_field() {
        let a = ParticleField::with_rng(50, 5, &mut StdRng::seed_from_u64(99));
        let b = ParticleField::with_rng(50, 5, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn target_follows_angle_and_distance() {
        let p = ParticleParams {
            angle: 0.0,
            distance: 400.0,
            start_delay: 0.0,
            size: 1.0,
            blur: 0.0,
            peak_opacity: 0.5,
            rotation: 0.0,
            travel_duration: 4.0,
            soft_core: false,
        };
        let (x, y) = p.target();
        assert!((x - 400.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }
}
