fn main() {
    multiversx_sc_meta_lib::cli_main::<handler_ctoken::AbiProvider>();
}
