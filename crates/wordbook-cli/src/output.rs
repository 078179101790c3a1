use std::io::{self, Write};

use wordbook_client::DefinitionBundle;

const RULE: &str = "============================";

pub fn write_dictionary(
    out: &mut impl Write,
    id: &str,
    short_name: &str,
    long_name: &str,
) -> io::Result<()> {
    writeln!(out, "Id ......: {id}")?;
    writeln!(out, "ShortName: {short_name}")?;
    writeln!(out, "LongName : {long_name}")?;
    writeln!(out, "{RULE}\n")
}

pub fn write_dictionary_info(
    out: &mut impl Write,
    id: &str,
    short_name: &str,
    long_name: &str,
    alphabet: &str,
    info: &str,
) -> io::Result<()> {
    writeln!(out, "Id ......: {id}")?;
    writeln!(out, "ShortName: {short_name}")?;
    writeln!(out, "LongName : {long_name}")?;
    writeln!(out, "Alphabet : {alphabet}")?;
    writeln!(out, "{RULE}\n")?;
    writeln!(out, "{info}")?;
    writeln!(out, "{RULE}\n")
}

pub fn write_suggestion(out: &mut impl Write, word_id: u64, word: &str) -> io::Result<()> {
    writeln!(out, "WordId: {word_id}")?;
    writeln!(out, "Word .: {word}")
}

/// Definitions grouped by dictionary; prints nothing for an empty bundle
pub fn write_definitions(out: &mut impl Write, bundle: &DefinitionBundle) -> io::Result<()> {
    if bundle.is_empty() {
        return Ok(());
    }

    writeln!(out, "{RULE}")?;
    writeln!(out, "Definitions:")?;
    for (dictionary_id, definitions) in bundle.iter() {
        writeln!(out, "Dictionary ID: {dictionary_id}")?;
        for def in definitions {
            writeln!(out, "Dictionary ..:{}:\n{}\n", def.dictionary_label, def.text)?;
        }
    }
    Ok(())
}

pub fn write_separator(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RULE}\n")
}
