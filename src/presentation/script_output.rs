// Script output - Writes the finished script
use crate::application::converter_service::Conversion;
use std::io::{self, Write};

pub fn write_script<W: Write>(out: &mut W, conversion: &Conversion) -> io::Result<()> {
    out.write_all(conversion.script.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_script_verbatim() {
        let conversion = Conversion {
            script: "local grafana = import 'grafonnet/grafana.libsonnet';\n".to_string(),
            diagnostics: Vec::new(),
            panels: 0,
        };
        let mut out = Vec::new();
        write_script(&mut out, &conversion).unwrap();
        assert_eq!(out, conversion.script.as_bytes());
    }
}
