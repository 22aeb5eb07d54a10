fn main() {
    multiversx_sc_meta_lib::cli_main::<wallet_mock::AbiProvider>();
}
