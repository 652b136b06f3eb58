fn main() {
    // ESP-IDFのビルド環境はespフィーチャー有効時のみ伝播する
    #[cfg(feature = "esp")]
    embuild::espidf::sysenv::output();

    println!("cargo:rerun-if-changed=cfg.toml");
}
