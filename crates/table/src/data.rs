//! Single-shot encrypt vectors
//!
//! Records are listed in the order a harness must run them. Output
//! capacities come from [`cipher_encrypt_output_max_size`] unless a record
//! deliberately undersizes the buffer.

use cipher_vectors_api::{
    cipher_encrypt_output_max_size, Algorithm, KeyType, KeyUsage, Status, AES_16B_KEY_SIZE,
    DES3_2B_KEY_SIZE, DES3_3B_KEY_SIZE, DES_8B_KEY_SIZE,
};

use crate::buffer::FixedBuf;
use crate::feature::{Feature, Gate};
use crate::vector::TestVector;

const AES_KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];

const PLAINTEXT: [u8; 16] = [
    0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a,
];

const CBC_PKCS7_CIPHERTEXT: [u8; 32] = [
    0xa0, 0x76, 0xec, 0x9d, 0xfb, 0xe4, 0x7d, 0x52, 0xaf, 0xc3, 0x57, 0x33, 0x6f, 0x20, 0x74, 0x3b,
    0xca, 0x7e, 0x8a, 0x15, 0xdc, 0x3c, 0x77, 0x64, 0x36, 0x31, 0x42, 0x93, 0x03, 0x1c, 0xd4, 0xf3,
];

const DES_KEYS: [u8; 24] = [
    0x01, 0x02, 0x04, 0x07, 0x08, 0x0b, 0x0d, 0x0e, 0xc1, 0xc2, 0xc4, 0xc7, 0xc8, 0xcb, 0xcd, 0xce,
    0x31, 0x32, 0x34, 0x37, 0x38, 0x3b, 0x3d, 0x3e,
];

const DES_PLAINTEXT: [u8; 8] = [0xed, 0xa4, 0x01, 0x12, 0x39, 0xbc, 0x3a, 0xc9];

const STREAM_PLAINTEXT: [u8; 15] = [
    0x49, 0x74, 0x20, 0x69, 0x73, 0x20, 0x61, 0x20, 0x73, 0x65, 0x63, 0x72, 0x65, 0x74, 0x2e,
];

const AES_CBC_NO_PADDING: Gate =
    Gate::All(&[Gate::Flag(Feature::Aes128), Gate::Flag(Feature::CbcNoPadding)]);
const AES_CBC_PKCS7: Gate = Gate::All(&[Gate::Flag(Feature::Aes128), Gate::Flag(Feature::CbcPkcs7)]);
const AES_CTR: Gate = Gate::All(&[Gate::Flag(Feature::Aes128), Gate::Flag(Feature::CipherModeCtr)]);
const AES_ARIA: Gate = Gate::All(&[Gate::Flag(Feature::Aes128), Gate::Flag(Feature::Aria)]);
const AES_CCM_STAR: Gate =
    Gate::All(&[Gate::Flag(Feature::Aes128), Gate::Flag(Feature::CcmStarNoTag)]);

const DES_1KEY_CBC_NO_PADDING: Gate =
    Gate::All(&[Gate::Flag(Feature::CbcNoPadding), Gate::Flag(Feature::Des1Key)]);
const DES_2KEY_CBC_NO_PADDING: Gate =
    Gate::All(&[Gate::Flag(Feature::CbcNoPadding), Gate::Flag(Feature::Des2Key)]);
const DES_3KEY_CBC_NO_PADDING: Gate =
    Gate::All(&[Gate::Flag(Feature::CbcNoPadding), Gate::Flag(Feature::Des3Key)]);

/// Every encrypt vector, before gating
pub static CIPHER_ENCRYPT_VECTORS: [TestVector; 15] = [
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - Encrypt - AES CBC_NO_PADDING"),
        key_type: KeyType::Aes,
        key_material: FixedBuf::new(&AES_KEY),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::CbcNoPadding,
        input: FixedBuf::new(&PLAINTEXT),
        output_capacity: cipher_encrypt_output_max_size(16),
        expected_output: FixedBuf::new(&[
            0x76, 0x49, 0xab, 0xac, 0x81, 0x19, 0xb2, 0x46, 0xce, 0xe9, 0x8e, 0x9b, 0x12, 0xe9,
            0x19, 0x7d,
        ]),
        expected_output_length: 32,
        expected_status: Status::Success,
        gate: AES_CBC_NO_PADDING,
    },
    TestVector {
        description: TestVector::describe(
            "Test psa_cipher_encrypt - Encrypt - AES CBC_NO_PADDING (Short input)",
        ),
        key_type: KeyType::Aes,
        key_material: FixedBuf::new(&AES_KEY),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::CbcNoPadding,
        input: FixedBuf::new(&[0x6b, 0xc1, 0xbe, 0xe2, 0x23]),
        output_capacity: cipher_encrypt_output_max_size(5),
        expected_output: FixedBuf::new(&[0x6b, 0xc1, 0xbe, 0xe2, 0x23]),
        expected_output_length: 21,
        expected_status: Status::InvalidArgument,
        gate: AES_CBC_NO_PADDING,
    },
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - Encrypt - AES CBC_PKCS7"),
        key_type: KeyType::Aes,
        key_material: FixedBuf::new(&AES_KEY),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::CbcPkcs7,
        input: FixedBuf::new(&PLAINTEXT),
        output_capacity: cipher_encrypt_output_max_size(16),
        expected_output: FixedBuf::new(&CBC_PKCS7_CIPHERTEXT),
        expected_output_length: 48,
        expected_status: Status::Success,
        gate: AES_CBC_PKCS7,
    },
    TestVector {
        description: TestVector::describe(
            "Test psa_cipher_encrypt - Encrypt - AES CBC_PKCS7 (Short input)",
        ),
        key_type: KeyType::Aes,
        key_material: FixedBuf::new(&AES_KEY),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::CbcPkcs7,
        input: FixedBuf::truncated(&PLAINTEXT, 15),
        output_capacity: cipher_encrypt_output_max_size(15),
        expected_output: FixedBuf::new(&[
            0x62, 0x79, 0xb4, 0x9d, 0x7f, 0x7a, 0x8d, 0xd8, 0x7b, 0x68, 0x51, 0x75, 0xd4, 0x27,
            0x6e, 0x24,
        ]),
        expected_output_length: 32,
        expected_status: Status::Success,
        gate: AES_CBC_PKCS7,
    },
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - Encrypt - AES CTR"),
        key_type: KeyType::Aes,
        key_material: FixedBuf::new(&AES_KEY),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::Ctr,
        input: FixedBuf::new(&PLAINTEXT),
        output_capacity: cipher_encrypt_output_max_size(16),
        expected_output: FixedBuf::new(&[
            0x8f, 0x94, 0x08, 0xfe, 0x80, 0xa8, 0x1d, 0x3e, 0x81, 0x3d, 0xa3, 0xc7, 0xb0, 0xb2,
            0xbd, 0x32,
        ]),
        expected_output_length: 32,
        expected_status: Status::Success,
        gate: AES_CTR,
    },
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - Encrypt - AES CTR (short input)"),
        key_type: KeyType::Aes,
        key_material: FixedBuf::new(&AES_KEY),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::Ctr,
        input: FixedBuf::truncated(&PLAINTEXT, 15),
        output_capacity: cipher_encrypt_output_max_size(15),
        expected_output: FixedBuf::new(&[
            0x8f, 0x94, 0x08, 0xfe, 0x80, 0xa8, 0x1d, 0x3e, 0x81, 0x3d, 0xa3, 0xc7, 0xb0, 0xb2,
            0xbd,
        ]),
        expected_output_length: 31,
        expected_status: Status::Success,
        gate: AES_CTR,
    },
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - Encrypt - DES CBC (nopad)"),
        key_type: KeyType::Des,
        key_material: FixedBuf::truncated(&DES_KEYS, DES_8B_KEY_SIZE),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::CbcNoPadding,
        input: FixedBuf::new(&DES_PLAINTEXT),
        output_capacity: cipher_encrypt_output_max_size(8),
        expected_output: FixedBuf::new(&[0x64, 0xf9, 0x17, 0xb0, 0x15, 0x2f, 0x8f, 0x05]),
        expected_output_length: 16,
        expected_status: Status::Success,
        gate: DES_1KEY_CBC_NO_PADDING,
    },
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - Encrypt - 2-key 3DE -CBC (nopad)"),
        key_type: KeyType::Des,
        key_material: FixedBuf::truncated(&DES_KEYS, DES3_2B_KEY_SIZE),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::CbcNoPadding,
        input: FixedBuf::new(&DES_PLAINTEXT),
        output_capacity: cipher_encrypt_output_max_size(8),
        expected_output: FixedBuf::new(&[0x5d, 0x06, 0x52, 0x42, 0x9c, 0x5b, 0x0a, 0xc7]),
        expected_output_length: 16,
        expected_status: Status::Success,
        gate: DES_2KEY_CBC_NO_PADDING,
    },
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - Encrypt - 3-key 3DE -CBC (nopad)"),
        key_type: KeyType::Des,
        key_material: FixedBuf::truncated(&DES_KEYS, DES3_3B_KEY_SIZE),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::CbcNoPadding,
        input: FixedBuf::new(&DES_PLAINTEXT),
        output_capacity: cipher_encrypt_output_max_size(16),
        expected_output: FixedBuf::new(&[0x81, 0x7c, 0xa7, 0xd6, 0x9b, 0x80, 0xd8, 0x6a]),
        expected_output_length: 16,
        expected_status: Status::Success,
        gate: DES_3KEY_CBC_NO_PADDING,
    },
    // 48 bytes are needed; 16 is a don't-care on this failure path.
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - small output buffer size"),
        key_type: KeyType::Aes,
        key_material: FixedBuf::new(&AES_KEY),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::CbcPkcs7,
        input: FixedBuf::new(&PLAINTEXT),
        output_capacity: 15,
        expected_output: FixedBuf::new(&CBC_PKCS7_CIPHERTEXT),
        expected_output_length: 16,
        expected_status: Status::BufferTooSmall,
        gate: AES_CBC_PKCS7,
    },
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - Decrypt - AES CBC_NO_PADDING"),
        key_type: KeyType::Aes,
        key_material: FixedBuf::new(&AES_KEY),
        usage: KeyUsage::DECRYPT,
        algorithm: Algorithm::CbcNoPadding,
        input: FixedBuf::truncated(&CBC_PKCS7_CIPHERTEXT, 16),
        output_capacity: cipher_encrypt_output_max_size(16),
        expected_output: FixedBuf::new(&PLAINTEXT),
        expected_output_length: 0,
        expected_status: Status::NotPermitted,
        gate: AES_CBC_NO_PADDING,
    },
    // The key initialiser holds 17 bytes; only the first 16 are the key.
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - Encrypt - AES ARIA"),
        key_type: KeyType::Aria,
        key_material: FixedBuf::with_len(
            &[
                0x00, 0x01, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
                0x0d, 0x0e, 0x0f,
            ],
            AES_16B_KEY_SIZE,
        ),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::CbcNoPadding,
        input: FixedBuf::new(&[
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ]),
        output_capacity: cipher_encrypt_output_max_size(16),
        expected_output: FixedBuf::new(&[
            0xd7, 0x18, 0xfb, 0xd6, 0xab, 0x64, 0x4c, 0x73, 0x9d, 0xa9, 0x5f, 0x3b, 0xe6, 0x45,
            0x17, 0x78,
        ]),
        expected_output_length: 32,
        expected_status: Status::Success,
        gate: AES_ARIA,
    },
    TestVector {
        description: TestVector::describe("Test psa_cipher_encrypt - Encrypt - CCM_STAR_NO_TAG"),
        key_type: KeyType::Aes,
        key_material: FixedBuf::new(&[
            0x90, 0x92, 0x9a, 0x4b, 0x0a, 0xc6, 0x5b, 0x35, 0x0a, 0xd1, 0x59, 0x16, 0x11, 0xfe,
            0x48, 0x29,
        ]),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::CcmStarNoTag,
        input: FixedBuf::new(&[
            0x4b, 0xfe, 0x4e, 0x35, 0x78, 0x4f, 0x0a, 0x65, 0xb5, 0x45, 0x47, 0x7e, 0x5e, 0x2f,
            0x4b, 0xae, 0x0e, 0x1e, 0x6f, 0xa7, 0x17, 0xea, 0xf2, 0xcb,
        ]),
        output_capacity: cipher_encrypt_output_max_size(24),
        expected_output: FixedBuf::new(&[
            0xa1, 0x6a, 0x2e, 0x74, 0x1f, 0x1c, 0xd9, 0x71, 0x72, 0x85, 0xb6, 0xd8, 0x82, 0xc1,
            0xfc, 0x53, 0x65, 0x5e, 0x97, 0x73, 0x76, 0x1a, 0xd6, 0x97,
        ]),
        expected_output_length: 37,
        expected_status: Status::Success,
        gate: AES_CCM_STAR,
    },
    TestVector {
        description: TestVector::describe(
            "Test psa_cipher_encrypt - Encrypt - CHACHA20 stream cipher",
        ),
        key_type: KeyType::Chacha20,
        key_material: FixedBuf::new(&[
            0x1c, 0x92, 0x40, 0xa5, 0xeb, 0x55, 0xd3, 0x8a, 0xf3, 0x33, 0x88, 0x86, 0x04, 0xf6,
            0xb5, 0xf0, 0x47, 0x39, 0x17, 0xc1, 0x40, 0x2b, 0x80, 0x09, 0x9d, 0xca, 0x5c, 0xbc,
            0x20, 0x70, 0x75, 0xc0,
        ]),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::StreamCipher,
        input: FixedBuf::new(&STREAM_PLAINTEXT),
        output_capacity: cipher_encrypt_output_max_size(15),
        expected_output: FixedBuf::new(&[
            0xdf, 0x2a, 0x1b, 0xaf, 0x8a, 0xcc, 0x1f, 0xf9, 0x25, 0x6d, 0x6b, 0x86, 0xb7, 0x5d,
            0xd7,
        ]),
        expected_output_length: 27,
        expected_status: Status::Success,
        gate: Gate::Flag(Feature::Chacha20),
    },
    TestVector {
        description: TestVector::describe(
            "Test psa_cipher_encrypt - Encrypt - XCHACHA20 stream cipher",
        ),
        key_type: KeyType::Xchacha20,
        key_material: FixedBuf::new(&[
            0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8a, 0x8b, 0x8c, 0x8d,
            0x8e, 0x8f, 0x90, 0x91, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9a, 0x9b,
            0x9c, 0x9d, 0x9e, 0x9f,
        ]),
        usage: KeyUsage::ENCRYPT,
        algorithm: Algorithm::StreamCipher,
        input: FixedBuf::new(&STREAM_PLAINTEXT),
        output_capacity: cipher_encrypt_output_max_size(15),
        expected_output: FixedBuf::new(&[
            0x9c, 0xd4, 0xb4, 0x42, 0xb0, 0xd7, 0x1e, 0xe5, 0x00, 0x91, 0x02, 0x6b, 0xe5, 0x74,
            0x09,
        ]),
        expected_output_length: 39,
        expected_status: Status::Success,
        gate: Gate::Flag(Feature::Xchacha20),
    },
];
