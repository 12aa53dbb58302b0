use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::{anyhow, Result};

use crate::{platform::LinkerScriptConstants, Configuration};

pub const LINKER_SCRIPT_FILENAME: &str = "link.x";

/// Generates the linker script `link.x`, which places the vector table at the
/// reset address of the configured platform and lays out code and data.
///
/// The reset handler relies on the `__sbss`, `__ebss`, `__sdata`, `__edata`
/// and `__sidata` symbols defined here to initialise RAM.
pub fn generate_linker_script(output: &Path, configuration: &Configuration) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(output.join(LINKER_SCRIPT_FILENAME))?;

    file.write_all(render_linker_script(configuration)?.as_bytes())?;
    Ok(())
}

pub fn render_linker_script(configuration: &Configuration) -> Result<String> {
    let constants = configuration.platform.linker_script_constants().ok_or_else(|| {
        anyhow!("Platform `{}` doesn't have linker script constants defined.", configuration.platform)
    })?;
    let core_name = configuration.platform.core().map(|c| c.to_string()).unwrap_or_default();

    Ok(format!(
        "/* Generated for {platform} ({core_name}). Do not edit. */\n\
         ENTRY(_c_int00);\n\
         EXTERN(VECTOR_TABLE);\n\
         \n\
         {memory}\
         \n\
         {sections}",
        platform = configuration.platform,
        core_name = core_name,
        memory = memory_block(&constants),
        sections = SECTIONS,
    ))
}

fn memory_block(constants: &LinkerScriptConstants) -> String {
    format!(
        "MEMORY\n\
         {{\n\
         \x20   VECTORS : ORIGIN = 0x{:08X}, LENGTH = 0x{:X}\n\
         \x20   FLASH : ORIGIN = 0x{:08X}, LENGTH = 0x{:X}\n\
         \x20   RAM : ORIGIN = 0x{:08X}, LENGTH = 0x{:X}\n\
         }}\n",
        constants.vectors.origin,
        constants.vectors.size,
        constants.flash.origin,
        constants.flash.size,
        constants.ram.origin,
        constants.ram.size,
    )
}

const SECTIONS: &str = "\
SECTIONS
{
    .vectors ORIGIN(VECTORS) :
    {
        KEEP(*(.vectors));
    } > VECTORS

    .text : ALIGN(4)
    {
        *(.text .text.*);
    } > FLASH

    .rodata : ALIGN(4)
    {
        *(.rodata .rodata.*);
        . = ALIGN(4);
    } > FLASH

    .data : ALIGN(4)
    {
        __sdata = .;
        *(.data .data.*);
        . = ALIGN(4);
        __edata = .;
    } > RAM AT > FLASH

    __sidata = LOADADDR(.data);

    .bss (NOLOAD) : ALIGN(4)
    {
        __sbss = .;
        *(.bss .bss.*);
        *(COMMON);
        . = ALIGN(4);
        __ebss = .;
    } > RAM

    _stack_top = ORIGIN(RAM) + LENGTH(RAM);

    /DISCARD/ :
    {
        *(.ARM.exidx .ARM.exidx.*);
    }
}
";

#[cfg(test)]
mod test {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn tms570_script_places_vectors_at_reset_address() {
        // Given
        let configuration = Configuration::new(Platform::Tms570, Default::default());

        // When
        let script = render_linker_script(&configuration).unwrap();

        // Then
        assert!(script.contains("VECTORS : ORIGIN = 0x00000000, LENGTH = 0x20"));
        assert!(script.contains("FLASH : ORIGIN = 0x00000020, LENGTH = 0x13FFE0"));
        assert!(script.contains("RAM : ORIGIN = 0x08000000, LENGTH = 0x30000"));
        assert!(script.contains("KEEP(*(.vectors));"));
        assert!(script.contains("ENTRY(_c_int00);"));
        assert!(script.starts_with("/* Generated for tms570 (cortex-r4f)"));
    }

    #[test]
    fn am243x_script_links_code_into_msram() {
        let configuration = Configuration::new(Platform::Am243x, Default::default());
        let script = render_linker_script(&configuration).unwrap();
        assert!(script.contains("FLASH : ORIGIN = 0x70080000, LENGTH = 0x40000"));
        assert!(script.contains("RAM : ORIGIN = 0x700C0000, LENGTH = 0x40000"));
    }

    #[test]
    fn unknown_platform_has_no_linker_script() {
        let configuration = Configuration::new(Platform::Unknown, Default::default());
        assert!(render_linker_script(&configuration).is_err());
    }
}
