use rand::SeedableRng;
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use toy_glwe::{GlweEngine, GlweParams, RingElement, SecretKey};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let params = GlweParams::toy();
    let engine = GlweEngine::new(params);
    println!(
        "Q = {}, P = {}, N = {}, K = {}, Delta = {}",
        params.ciphertext_modulus(),
        params.plaintext_modulus(),
        params.degree(),
        params.rank(),
        params.delta()
    );

    // Fixed key, fixed mask, zero noise
    let sk = SecretKey::from_signed(&[[1i64, 0, 1, 1, 0, 0, 1, 0]], &params)?;
    let m = engine.plaintext(vec![1, 0, 1, 0, 1, 1, 1, 0])?;
    let mask = RingElement::from_signed(&[-2046, 17, 2046, -1, 0, 1234, -999, 5], 4093)?;
    let noise = RingElement::zero(8, 4093)?;
    let ct = engine.encryptor().encrypt_with(&m, &sk, &[mask], &noise)?;
    println!("m      = {:?}", m.symbols());
    println!("b      = {:#}", ct.body());
    println!("phase  = {:#}", engine.decryptor().phase(&ct, &sk)?);
    println!("result = {:?}", engine.decrypt(&ct, &sk)?.symbols());

    // Seeded randomness reproduces the same key and ciphertext
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let sk = engine.generate_secret_key(&mut rng)?;
    let ct = engine.encrypt(&m, &sk, &mut rng)?;
    println!("seeded a = {:#}", ct.mask()[0]);
    println!("seeded result = {:?}", engine.decrypt(&ct, &sk)?.symbols());

    // OS entropy and public-key encryption of a byte string
    let rlwe = GlweEngine::new(GlweParams::new_rlwe(1 << 20, 256, 32)?);
    let (sk, pk) = rlwe.generate_keypair(&mut OsRng)?;
    let message = b"hello, lattice";
    let ct = rlwe.encrypt_public(&rlwe.plaintext_from_bytes(message)?, &pk, &mut OsRng)?;
    let recovered = rlwe.decrypt(&ct, &sk)?.to_bytes(message.len())?;
    println!("recovered = {:?}", String::from_utf8_lossy(&recovered));

    Ok(())
}
