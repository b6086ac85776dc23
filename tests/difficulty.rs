use strain_difficulty::{
    ConfigError, Difficulty, DifficultyAttributes, DifficultyError, FlashlightScoring,
    GradualDifficulty, StrainConfig, create_difficulty_objects, difficulty_value,
};

use self::common::*;

mod common;

macro_rules! test_cases {
    ( $objects:expr => {
        $( $name:literal : $difficulty:expr => {
            $( $key:ident: $value:expr $( , )? )*
        } ;)*
    } $( ; )? ) => {
        let objects = $objects;

        $(
            let actual = $difficulty.calculate(&objects).unwrap();
            let expected = DifficultyAttributes {
                $( $key: $value, )*
                ..actual.clone()
            };

            assert_eq!(actual, expected, "{}", $name);
        )*
    };
}

#[test]
fn three_circles() {
    test_cases! {
        vec![circle(0.0, 0.0, 0.0), circle(50.0, 0.0, 500.0), circle(50.0, 30.0, 1000.0)] => {
            "distance": Difficulty::new().scaling_factor(1.0) => {
                flashlight: 650_000.0,
                ar: 5.0,
                n_objects: 3,
                max_combo: 3,
            };
            "combo": Difficulty::new().scaling_factor(1.0).scoring(FlashlightScoring::Combo) => {
                flashlight: 35_000.0,
            };
            "doubled distances": Difficulty::new().scaling_factor(2.0) => {
                flashlight: 1_300_000.0,
            };
            "two passed": Difficulty::new().scaling_factor(1.0).passed_objects(2) => {
                flashlight: 250_000.0,
                n_objects: 2,
                max_combo: 2,
            };
        };
    }
}

#[test]
fn sliders_add_travel_distance() {
    test_cases! {
        vec![slider(0.0, 0.0, 0.0, (100.0, 0.0), 1), circle(100.0, 40.0, 1000.0)] => {
            // 40 jump + 2 * 100 travel
            "slider": Difficulty::new().scaling_factor(1.0) => {
                flashlight: 240.0 * 5000.0,
                max_combo: 4,
            };
        };
    }
}

#[test]
fn spinners_contribute_nothing() {
    let objects = vec![
        circle(0.0, 0.0, 0.0),
        spinner(500.0),
        circle(100.0, 0.0, 3000.0),
    ];

    let strains = Difficulty::new()
        .scaling_factor(1.0)
        .strains(&objects)
        .unwrap();

    let values: Vec<_> = strains.samples.iter().map(|s| s.strain).collect();

    // The spinner still emits a sample and is the previous object for the
    // last circle whose jump starts at the spinner's position.
    let last_jump = f64::from((156.0_f32 * 156.0 + 192.0 * 192.0).sqrt());

    assert_eq!(values.len(), 3);
    assert_eq!(values[0], 0.0);
    assert_eq!(values[1], 0.0);
    assert!((values[2] - last_jump * 5000.0).abs() < 1e-6 * last_jump * 5000.0);
}

#[test]
fn combo_shrinks_visibility_radius() {
    let objects = jumps(250, 100.0, 50.0);
    let strains = Difficulty::new().strains(&objects).unwrap();

    let radii: Vec<_> = strains.samples.iter().map(|s| s.inspect).collect();

    assert_eq!(radii[0], 160.0);
    assert_eq!(radii[98], 160.0);
    assert_eq!(radii[99], 120.0);
    assert_eq!(radii[198], 120.0);
    assert_eq!(radii[199], 100.0);
    assert_eq!(radii[249], 100.0);
}

#[test]
fn decaying_configuration() {
    let objects = jumps(100, 200.0, 80.0);

    let decaying = Difficulty::new()
        .config(StrainConfig::FLASHLIGHT.decay_base(0.15).decay_weight(0.9))
        .calculate(&objects)
        .unwrap();

    let cumulative = Difficulty::new().calculate(&objects).unwrap();

    assert!(decaying.flashlight > 0.0);
    assert!(decaying.flashlight < cumulative.flashlight);
}

#[test]
fn clock_rate_only_affects_time() {
    let objects = jumps(50, 150.0, 100.0);

    let nm = Difficulty::new().calculate(&objects).unwrap();
    let dt = Difficulty::new().clock_rate(1.5).calculate(&objects).unwrap();

    // Without decay, time does not matter for the strain itself
    assert_eq!(nm.flashlight, dt.flashlight);
    assert!(dt.ar > nm.ar);

    let config = StrainConfig::FLASHLIGHT.decay_base(0.3);
    let nm = Difficulty::new().config(config).calculate(&objects).unwrap();
    let dt = Difficulty::new()
        .config(config)
        .clock_rate(1.5)
        .calculate(&objects)
        .unwrap();

    // Less time between objects means less decay
    assert!(dt.flashlight > nm.flashlight);
}

#[test]
fn empty_input() {
    assert!(create_difficulty_objects(&[], 1.0, 1.0).unwrap().is_empty());
    assert_eq!(difficulty_value(Vec::<f64>::new(), 0.9), 0.0);

    let attrs = Difficulty::new().calculate(&[]).unwrap();

    assert_eq!(attrs.flashlight, 0.0);
    assert_eq!(attrs.n_objects, 0);
}

#[test]
fn out_of_order_input() {
    let objects = [circle(0.0, 0.0, 100.0), circle(0.0, 0.0, 50.0)];

    assert_eq!(
        Difficulty::new().calculate(&objects),
        Err(DifficultyError::OutOfOrderInput {
            idx: 1,
            prev: 100.0,
            curr: 50.0
        })
    );
}

#[test]
fn invalid_configuration() {
    let objects = jumps(3, 100.0, 10.0);

    let res = Difficulty::new()
        .config(StrainConfig::FLASHLIGHT.history_len(0))
        .calculate(&objects);

    assert_eq!(
        res,
        Err(DifficultyError::InvalidConfiguration(ConfigError::EmptyHistory))
    );

    let diff_objects = Difficulty::new().difficulty_objects(&objects).unwrap();
    let difficulty = Difficulty::new().config(StrainConfig::FLASHLIGHT.decay_base(f64::NAN));

    assert!(matches!(
        GradualDifficulty::new(&difficulty, &diff_objects),
        Err(DifficultyError::InvalidConfiguration(ConfigError::DecayBase(_)))
    ));
}

#[test]
fn invalid_object_metric() {
    let objects = [circle(0.0, 0.0, 0.0), circle(0.0, f32::INFINITY, 10.0)];

    assert!(matches!(
        Difficulty::new().calculate(&objects),
        Err(DifficultyError::InvalidObjectMetric {
            idx: 1,
            metric: "y position",
            ..
        })
    ));
}

#[test]
fn independent_calculations_in_parallel() {
    let objects = jumps(200, 120.0, 90.0);
    let expected = Difficulty::new().calculate(&objects).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| Difficulty::new().calculate(&objects).unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
