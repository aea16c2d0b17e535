//! Transform dispatcher regression test
//!
//! Runs every translation/noise pair over its accepted index range and
//! checks shape preservation, label contiguity and the documented
//! operator identities.

use fieldaug_augment::{AugmentError, Noise, Translation, transform};
use fieldaug_core::{Field, Mask};
use fieldaug_test::{RegParams, fixtures};
use fieldaug_transform::rotate_90;

#[test]
fn transform_reg() {
    let mut rp = RegParams::new("transform");

    let field = fixtures::gradient_field(16, 16).expect("gradient field");
    let mask = fixtures::quadrant_mask(16, 16).expect("quadrant mask");
    let snapshot = field.deep_clone();

    // --- Test 1: every valid pair keeps the shape ---
    let mut runs = 0;
    for translation in Translation::ALL {
        for t_idx in translation.index_range(16, 16) {
            for noise in Noise::ALL {
                for n_idx in noise.index_range() {
                    let (f, m) = transform(&field, &mask, translation, t_idx, noise, n_idx)
                        .expect("valid configuration");
                    rp.compare_bool(true, f.dimensions() == (16, 16) && m.dimensions() == (16, 16));
                    runs += 1;
                }
            }
        }
    }
    eprintln!("  {} configurations", runs);
    rp.compare_field(&snapshot, &field);

    // --- Test 2: identity + identity ---
    let (f, m) = transform(&field, &mask, Translation::Identity, 0, Noise::Identity, 0).expect("identity");
    rp.compare_field(&field, &f);
    rp.compare_mask(&mask, &m);

    // --- Test 3: quartile split relabels each quadrant to 1..=k ---
    let stripes = fixtures::stripe_mask(16, 16, 2).expect("stripe mask");
    for q in 0..4 {
        let (_, m) = transform(&field, &stripes, Translation::QuartileSplit, q, Noise::Identity, 0)
            .expect("quartile");
        // Each 8 px wide quadrant holds four stripes; the left ones include label 0
        let expected = if q % 2 == 0 { 3 } else { 4 };
        rp.compare_labels(&m, expected);
    }

    // --- Test 4: end-to-end 4x4 example ---
    let zero = Field::new(4, 4).expect("zero field");
    let small = Mask::from_labels(4, 4, vec![0, 0, 1, 1, 0, 0, 1, 1, 2, 2, 0, 0, 2, 2, 0, 0])
        .expect("small mask");
    let (f, m) = transform(&zero, &small, Translation::QuartileSplit, 0, Noise::Identity, 0)
        .expect("end-to-end");
    rp.compare_field(&zero, &f);
    rp.compare_mask(&Mask::new(4, 4).expect("zero mask"), &m);

    // --- Test 5: offset 0 is the top-left half replicated ---
    let (_, m0) = transform(&field, &mask, Translation::OffsetCrop, 0, Noise::Identity, 0).expect("offset 0");
    let (_, q0) = transform(&field, &mask, Translation::QuartileSplit, 0, Noise::Identity, 0).expect("quartile 0");
    rp.compare_mask(&q0, &m0);

    // --- Test 6: rotation 2 equals two manual quarter turns ---
    let (f, _) = transform(&field, &mask, Translation::Identity, 0, Noise::Rotation, 2).expect("rotation 2");
    let manual = rotate_90(&rotate_90(&field, false).expect("rot"), false).expect("rot");
    rp.compare_field(&manual, &f);

    // --- Test 7: vertical flip twice is the identity ---
    let (f1, m1) = transform(&field, &mask, Translation::Identity, 0, Noise::Flip, 1).expect("flip");
    let (f2, m2) = transform(&f1, &m1, Translation::Identity, 0, Noise::Flip, 1).expect("flip");
    rp.compare_field(&field, &f2);
    rp.compare_mask(&mask, &m2);

    // --- Test 8: gamma 10 is the identity, blur leaves the mask ---
    let (f, m) = transform(&field, &mask, Translation::Identity, 0, Noise::Gamma, 10).expect("gamma");
    rp.compare_field(&field, &f);
    rp.compare_mask(&mask, &m);
    let (_, m) = transform(&field, &mask, Translation::Identity, 0, Noise::Blur, 3).expect("blur");
    rp.compare_mask(&mask, &m);

    // --- Test 9: rejected indices ---
    let rejected = [
        (Translation::Identity, 0, Noise::Rotation, 4),
        (Translation::Identity, 0, Noise::Gamma, 4),
        (Translation::Identity, 0, Noise::Gamma, 16),
        (Translation::Identity, 0, Noise::Blur, 0),
        (Translation::Identity, 1, Noise::Identity, 0),
        (Translation::QuartileSplit, 4, Noise::Identity, 0),
        (Translation::OffsetCrop, 9, Noise::Identity, 0),
    ];
    for (t, ti, n, ni) in rejected {
        let result = transform(&field, &mask, t, ti, n, ni);
        rp.compare_bool(true, matches!(result, Err(AugmentError::IndexOutOfRange { .. })));
    }

    assert!(rp.cleanup(), "transform regression test failed");
}
