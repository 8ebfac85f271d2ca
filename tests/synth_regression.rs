//! End-to-end synthesis session: heterogeneous generators admitted to one
//! sequencer, pulled to exhaustion.

use framesynth::gen::{
    AdsrEnvelope, AdsrParams, ConstantGenerator, ExponentialGenerator, FmSynthGenerator,
    FmSynthModParams, FrameGenerator, RampGenerator,
};
use framesynth::pitch::key_to_phase_per_sample;
use framesynth::Sequencer;

const SAMPLE_RATE: f32 = 16_000.0;
const FRAME_SIZE: usize = 256;

fn fm_voice(key: f32, sustain: usize) -> FmSynthGenerator {
    let env_params = AdsrParams {
        attack: 800,
        decay: 400,
        sustain,
        release: 1600,
        slevel1: 0.5,
        slevel2: 0.05,
    };
    let mod_params = FmSynthModParams::new(vec![2.0, 6.0, 12.0], vec![1.0, 3.0, 1.0]).unwrap();

    FmSynthGenerator::new(
        mod_params,
        env_params,
        env_params,
        key_to_phase_per_sample(key, SAMPLE_RATE),
        0.2,
    )
    .unwrap()
}

#[test]
fn mixed_session_runs_to_silence() {
    let mut seq = Sequencer::new(FRAME_SIZE, 1.0);

    seq.add(fm_voice(12.0, 16_000));
    seq.add(fm_voice(24.0, 8_000));
    seq.add(ExponentialGenerator::new(0.25, 2_000.0, 20_000));
    seq.add(RampGenerator::new(0.0, 0.1, 5_000));
    assert_eq!(seq.generator_count(), 4);

    // The exponential is the longest-lived voice at 20k samples.
    let longest = 20_000;
    let frames_to_drain = longest / FRAME_SIZE + 2;

    let mut heard_signal = false;
    for _ in 0..frames_to_drain {
        let frame = seq.next_frame();
        assert_eq!(frame.len(), FRAME_SIZE);
        assert!(frame.iter().all(|x| x.is_finite()));
        heard_signal |= frame.iter().any(|x| x.abs() > 1e-4);
    }
    assert!(heard_signal, "session produced no audible output");
    assert_eq!(seq.generator_count(), 0);

    // Every voice retired: nothing but silence from here on.
    assert!(seq.next_frame().iter().all(|&x| x == 0.0));
}

#[test]
fn lone_envelope_passes_through_unchanged() {
    // A single ADSR admitted alone reproduces its own shape through the
    // sequencer's mix.
    let params = AdsrParams {
        attack: 64,
        decay: 64,
        sustain: 256,
        release: 128,
        slevel1: 0.5,
        slevel2: 0.1,
    };
    let total = params.total_size();

    let mut seq = Sequencer::new(64, 1.0);
    seq.add(AdsrEnvelope::new(params));

    let mut mixed = Vec::new();
    while seq.generator_count() > 0 {
        mixed.extend_from_slice(&seq.next_frame());
    }
    // The zero-padded tail of the terminal frame is silence.
    assert!(mixed.len() >= total);
    assert!(mixed[total..].iter().all(|&x| x == 0.0));

    let mut reference = AdsrEnvelope::new(params);
    reference.set_frame_size(64);
    let mut frame = Vec::new();
    let mut expected = Vec::new();
    while !reference.has_ended() {
        reference.next_frame(&mut frame);
        expected.extend_from_slice(&frame);
    }

    for (ii, (&got, &want)) in mixed.iter().zip(expected.iter()).enumerate() {
        assert!((got - want).abs() < 1e-7, "sample {ii}: {got} vs {want}");
    }
}

#[test]
fn gain_applies_to_the_whole_mix() {
    let mut quiet = Sequencer::new(32, 0.25);
    let mut loud = Sequencer::new(32, 1.0);
    quiet.add(ConstantGenerator::new(0.8, 64));
    loud.add(ConstantGenerator::new(0.8, 64));

    let q = quiet.next_frame();
    let l = loud.next_frame();
    for (a, b) in q.iter().zip(l.iter()) {
        assert!((a - b * 0.25).abs() < 1e-7);
    }
}
