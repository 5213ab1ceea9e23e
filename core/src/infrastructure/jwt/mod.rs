pub mod hs256_verifier;
