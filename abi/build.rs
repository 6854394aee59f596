use std::process::Command;
use tonic_build::Builder;

fn main() {
    // builds must not depend on a system protoc
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", protoc);
        }
    }

    tonic_build::configure()
        .out_dir("src/pb")
        .with_derive_builder(&["rental.BookingQuery", "rental.BookingFilter"])
        .with_derive_builder_into(
            "rental.BookingQuery",
            &["item_id", "renter_id", "status", "page", "desc"],
        )
        .with_derive_builder_into(
            "rental.BookingFilter",
            &["item_id", "renter_id", "status", "desc"],
        )
        .with_derive_builder_option("rental.BookingFilter", &["cursor"])
        .with_derive_builder_option("rental.BookingQuery", &["start", "end"])
        .with_type_attributes(
            &["rental.BookingFilter", "rental.BookingQuery"],
            &[r#"#[builder(build_fn(name = "private_build"))]"#],
        )
        .with_field_attributes(
            &[
                "rental.BookingFilter.page_size",
                "rental.BookingQuery.page_size",
            ],
            &["#[builder(setter(into), default = \"10\")]"],
        )
        .compile(&["protos/rental.proto"], &["protos"])
        .unwrap();

    Command::new("cargo").args(["fmt"]).output().ok();

    println!("cargo:rerun-if-changed=protos/rental.proto")
}

trait BuildExt {
    fn with_derive_builder(self, paths: &[&str]) -> Self;
    fn with_derive_builder_into(self, path: &str, fields: &[&str]) -> Self;
    fn with_derive_builder_option(self, path: &str, fields: &[&str]) -> Self;
    fn with_field_attributes(self, paths: &[&str], attributes: &[&str]) -> Self;
    fn with_type_attributes(self, paths: &[&str], attributes: &[&str]) -> Self;
}

impl BuildExt for Builder {
    fn with_derive_builder(self, paths: &[&str]) -> Self {
        paths.iter().fold(self, |acc, path| {
            acc.type_attribute(path, "#[derive(derive_builder::Builder)]")
        })
    }

    fn with_derive_builder_into(self, path: &str, fields: &[&str]) -> Self {
        fields.iter().fold(self, |acc, field| {
            acc.field_attribute(
                format!("{}.{}", path, field),
                "#[builder(setter(into), default)]",
            )
        })
    }

    fn with_derive_builder_option(self, path: &str, fields: &[&str]) -> Self {
        fields.iter().fold(self, |acc, field| {
            acc.field_attribute(
                format!("{}.{}", path, field),
                "#[builder(setter(into, strip_option), default)]",
            )
        })
    }

    fn with_field_attributes(self, paths: &[&str], attributes: &[&str]) -> Self {
        let attr = attributes.join("\n");
        paths.iter().fold(self, |builder, ty| {
            builder.field_attribute(ty, attr.as_str())
        })
    }

    fn with_type_attributes(self, paths: &[&str], attributes: &[&str]) -> Self {
        let attr = attributes.join("\n");

        paths.iter().fold(self, |builder, ty| {
            builder.type_attribute(ty, attr.as_str())
        })
    }
}
