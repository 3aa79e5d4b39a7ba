fn main() {
    println!("cargo:rerun-if-changed=components/ds18b20_bindings.h");

    // Host builds (tests, fuzzing) have no ESP-IDF environment to export.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
