fn main() {
    multiversx_sc_meta_lib::cli_main::<pausable_manager::AbiProvider>();
}
