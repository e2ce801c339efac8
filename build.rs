fn main() {
    if cfg!(target_os = "windows") {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "JavaWizard")
            .set("FileDescription", "JavaWizard JDK manager")
            .set("LegalCopyright", "Copyright (c) 2025 JavaWizard contributors");
        if let Err(err) = res.compile() {
            println!("cargo:warning=failed to embed Windows resources: {err}");
        }
    }
}
