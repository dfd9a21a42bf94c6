use rand::rngs::OsRng;
use rand::{SeedableRng, TryCryptoRng, TryRngCore};
use rand_chacha::ChaCha20Rng;
use toy_glwe::{
    CoeffDistribution, Ciphertext, Decryptor, Encoder, Encryptor, GlweEngine, GlweError,
    GlweParams, KeyGenerator, Plaintext, RingElement, SecretKey,
};

const MESSAGE: [u64; 8] = [1, 0, 1, 0, 1, 1, 1, 0];
const KEY: [i64; 8] = [1, 0, 1, 1, 0, 0, 1, 0];

fn toy() -> (GlweParams, SecretKey, Plaintext) {
    let params = GlweParams::toy();
    let sk = SecretKey::from_signed(&[KEY], &params).unwrap();
    let m = Plaintext::new(MESSAGE.to_vec(), &params).unwrap();
    (params, sk, m)
}

fn constant_noise(value: i64) -> RingElement {
    RingElement::from_signed(&[value; 8], 4093).unwrap()
}

fn fixed_mask() -> RingElement {
    RingElement::from_signed(&[-2046, 17, 2046, -1, 0, 1234, -999, 5], 4093).unwrap()
}

#[test]
fn demo_scenario_round_trips() {
    let (params, sk, m) = toy();
    let ct = Encryptor::new(params)
        .encrypt_with(&m, &sk, &[fixed_mask()], &constant_noise(0))
        .unwrap();

    let decryptor = Decryptor::new(params);
    let phase = decryptor.phase(&ct, &sk).unwrap();
    assert_eq!(phase.coeffs(), &[1023, 0, 1023, 0, 1023, 1023, 1023, 0]);
    assert_eq!(decryptor.decrypt(&ct, &sk).unwrap(), m);
}

#[test]
fn noise_within_half_delta_always_decodes() {
    let (params, sk, _) = toy();
    let encryptor = Encryptor::new(params);
    let decryptor = Decryptor::new(params);
    assert_eq!(Encoder::new(params).noise_bound(), 511);

    for symbols in [[0u64; 8], [1; 8], [2; 8], [3; 8], [0, 1, 2, 3, 3, 2, 1, 0]] {
        let m = Plaintext::new(symbols.to_vec(), &params).unwrap();
        for noise in [-511, -300, -1, 0, 1, 300, 511] {
            let ct = encryptor
                .encrypt_with(&m, &sk, &[fixed_mask()], &constant_noise(noise))
                .unwrap();
            assert_eq!(
                decryptor.decrypt(&ct, &sk).unwrap(),
                m,
                "noise {noise} broke symbols {symbols:?}"
            );
        }
    }
}

#[test]
fn noise_of_half_delta_decodes_wrong_without_error() {
    let (params, sk, _) = toy();
    let encryptor = Encryptor::new(params);
    let decryptor = Decryptor::new(params);

    // +512 pushes every symbol to the next one
    let m = Plaintext::new(vec![0, 1, 2, 3, 0, 1, 2, 3], &params).unwrap();
    let ct = encryptor
        .encrypt_with(&m, &sk, &[fixed_mask()], &constant_noise(512))
        .unwrap();
    let decrypted = decryptor.decrypt(&ct, &sk).unwrap();
    assert_eq!(decrypted.symbols(), &[1, 2, 3, 0, 1, 2, 3, 0]);

    // -512 pulls interior symbols down; symbol 0 survives because the
    // remainder Q mod P widens its window from below
    let ct = encryptor
        .encrypt_with(&m, &sk, &[fixed_mask()], &constant_noise(-512))
        .unwrap();
    let decrypted = decryptor.decrypt(&ct, &sk).unwrap();
    assert_eq!(decrypted.symbols(), &[0, 0, 1, 2, 0, 0, 1, 2]);
}

#[test]
fn single_coefficient_overflow_only_corrupts_that_coefficient() {
    let (params, sk, m) = toy();
    let noise = RingElement::from_signed(&[0, 0, 0, 600, 0, 0, 0, 0], 4093).unwrap();
    let ct = Encryptor::new(params)
        .encrypt_with(&m, &sk, &[fixed_mask()], &noise)
        .unwrap();
    let decrypted = Decryptor::new(params).decrypt(&ct, &sk).unwrap();
    assert_eq!(decrypted.symbols(), &[1, 0, 1, 1, 1, 1, 1, 0]);
}

#[test]
fn seeded_sources_are_deterministic() {
    let (params, _, m) = toy();
    let generator = KeyGenerator::new(params);
    let encryptor = Encryptor::new(params);

    let run = |seed: u64| {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let sk = generator.generate_secret_key(&mut rng).unwrap();
        let ct = encryptor.encrypt(&m, &sk, &mut rng).unwrap();
        (sk, ct)
    };

    let (sk_a, ct_a) = run(42);
    let (sk_b, ct_b) = run(42);
    assert_eq!(sk_a, sk_b);
    assert_eq!(ct_a, ct_b);

    let (_, ct_c) = run(43);
    assert_ne!(ct_a, ct_c);
}

#[test]
fn fresh_masks_differ_between_encryptions() {
    let (params, sk, m) = toy();
    let encryptor = Encryptor::new(params);
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let first = encryptor.encrypt(&m, &sk, &mut rng).unwrap();
    let second = encryptor.encrypt(&m, &sk, &mut rng).unwrap();
    assert_ne!(first.mask(), second.mask());
}

#[test]
fn random_encryptions_round_trip() {
    let mut rng = ChaCha20Rng::seed_from_u64(1234);
    for (q, p, n, k) in [
        (4093, 4, 8, 1),
        (1 << 20, 256, 32, 8),
        (1024, 2, 1, 16),
        (65536, 16, 64, 2),
    ] {
        let engine = GlweEngine::new(GlweParams::new(q, p, n, k).unwrap());
        let sk = engine.generate_secret_key(&mut rng).unwrap();
        for _ in 0..5 {
            let symbols = (0..n as u64).map(|i| (i * 7 + 3) % p).collect();
            let m = engine.plaintext(symbols).unwrap();
            let ct = engine.encrypt(&m, &sk, &mut rng).unwrap();
            assert_eq!(engine.decrypt(&ct, &sk).unwrap(), m);
        }
    }
}

#[test]
fn gaussian_noise_with_ternary_keys() {
    let engine = GlweEngine::builder()
        .ciphertext_modulus(1 << 32)
        .plaintext_modulus(16)
        .degree(256)
        .rank(2)
        .key_distribution(CoeffDistribution::UniformTernary)
        .noise_distribution(CoeffDistribution::Gaussian { std_dev: 3.2 })
        .build()
        .unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    let (sk, pk) = engine.generate_keypair(&mut rng).unwrap();

    let m = engine.plaintext_from_bytes(b"lattice noise").unwrap();
    let by_secret = engine.encrypt(&m, &sk, &mut rng).unwrap();
    let by_public = engine.encrypt_public(&m, &pk, &mut rng).unwrap();
    assert_eq!(engine.decrypt(&by_secret, &sk).unwrap(), m);
    assert_eq!(engine.decrypt(&by_public, &sk).unwrap(), m);
    assert_eq!(
        engine.decrypt(&by_public, &sk).unwrap().to_bytes(13).unwrap(),
        b"lattice noise"
    );
}

#[test]
fn os_entropy_round_trip() {
    let (params, _, m) = toy();
    let engine = GlweEngine::new(params);
    let mut rng = OsRng;
    let sk = engine.generate_secret_key(&mut rng).unwrap();
    let ct = engine.encrypt(&m, &sk, &mut rng).unwrap();
    assert_eq!(engine.decrypt(&ct, &sk).unwrap(), m);
}

#[test]
fn invalid_parameters_fail_fast() {
    assert!(matches!(
        GlweParams::new(4093, 5, 8, 1),
        Err(GlweError::InvalidParameters { .. })
    ));
    assert!(matches!(
        GlweEngine::builder()
            .ciphertext_modulus(4093)
            .plaintext_modulus(4)
            .degree(6)
            .build(),
        Err(GlweError::InvalidParameters { .. })
    ));
}

#[test]
fn mismatched_shapes_are_reported() {
    let (params, sk, m) = toy();
    let wide = GlweParams::new(4093, 4, 16, 1).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(5);

    let wide_sk = KeyGenerator::new(wide).generate_secret_key(&mut rng).unwrap();
    assert_eq!(
        Encryptor::new(params).encrypt(&m, &wide_sk, &mut rng),
        Err(GlweError::DimensionMismatch {
            expected: 8,
            actual: 16
        })
    );

    let ct = Encryptor::new(params).encrypt(&m, &sk, &mut rng).unwrap();
    assert_eq!(
        Decryptor::new(wide).decrypt(&ct, &wide_sk),
        Err(GlweError::DimensionMismatch {
            expected: 16,
            actual: 8
        })
    );

    let rank_two = Ciphertext::from_parts(
        vec![ct.mask()[0].clone(), ct.mask()[0].clone()],
        ct.body().clone(),
    )
    .unwrap();
    assert_eq!(
        Decryptor::new(params).decrypt(&rank_two, &sk),
        Err(GlweError::DimensionMismatch {
            expected: 1,
            actual: 2
        })
    );
}

#[derive(Debug)]
struct BrokenSource;

impl TryRngCore for BrokenSource {
    type Error = std::io::Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Err(std::io::Error::other("entropy pool drained"))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Err(std::io::Error::other("entropy pool drained"))
    }

    fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
        Err(std::io::Error::other("entropy pool drained"))
    }
}

impl TryCryptoRng for BrokenSource {}

#[test]
fn randomness_failures_propagate() {
    let (params, sk, m) = toy();
    let expected = GlweError::RandomnessFailure {
        message: "entropy pool drained".into(),
    };

    assert_eq!(
        KeyGenerator::new(params)
            .generate_secret_key(&mut BrokenSource)
            .unwrap_err(),
        expected
    );
    assert_eq!(
        Encryptor::new(params)
            .encrypt(&m, &sk, &mut BrokenSource)
            .unwrap_err(),
        expected
    );
}

#[test]
fn shared_keys_and_ciphertexts_across_threads() {
    let (params, sk, m) = toy();
    let engine = GlweEngine::new(params);
    let ct = engine
        .encrypt(&m, &sk, &mut ChaCha20Rng::seed_from_u64(0))
        .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let (engine, sk, ct, m) = (&engine, &sk, &ct, &m);
                scope.spawn(move || {
                    let mut rng = ChaCha20Rng::seed_from_u64(seed);
                    let fresh = engine.encrypt(m, sk, &mut rng).unwrap();
                    (
                        engine.decrypt(ct, sk).unwrap(),
                        engine.decrypt(&fresh, sk).unwrap(),
                    )
                })
            })
            .collect();
        for handle in handles {
            let (shared, fresh) = handle.join().unwrap();
            assert_eq!(shared, m);
            assert_eq!(fresh, m);
        }
    });
}
