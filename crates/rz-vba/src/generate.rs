//! Renders the two macro modules from a compiled layout.
//!
//! Every cell reference in the emitted code is a column literal taken from
//! the layout. [`generate_modules`] re-checks each literal against the
//! layout's assigned column range before rendering anything; a dangling
//! reference aborts generation instead of producing a workbook whose macros
//! silently skip a constraint.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use rz_layout::{Layout, ResolvedLink, ResolvedPair, RowRange, SCHOOL_NAME_COL};
use rz_model::GRID_SHEET;

use crate::error::{Result, VbaError};

/// File name for the grid sheet's change-handler module.
pub const SHEET_MODULE_FILE: &str = "Hoja_RegistroGeneral.bas";
/// File name for the workbook's pre-save module.
pub const WORKBOOK_MODULE_FILE: &str = "ThisWorkbook.bas";

/// The two generated macro modules, ready to import into the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VbaModules {
    /// `Worksheet_Change` handler for the data-entry sheet.
    pub worksheet_change: String,
    /// `Workbook_BeforeSave` validator for the workbook.
    pub workbook_before_save: String,
}

/// Generate both macro modules for a layout.
pub fn generate_modules(layout: &Layout) -> Result<VbaModules> {
    verify_references(layout)?;
    debug!(
        pairs = layout.pairs.len(),
        links = layout.links.len(),
        rows = layout.data_rows.len(),
        "rendering macro modules"
    );
    Ok(VbaModules {
        worksheet_change: change_handler(layout),
        workbook_before_save: before_save(layout),
    })
}

/// Write the modules as sidecar `.bas` files next to the workbook.
pub fn write_modules(output_dir: &Path, modules: &VbaModules) -> Result<Vec<PathBuf>> {
    let sheet_path = output_dir.join(SHEET_MODULE_FILE);
    let workbook_path = output_dir.join(WORKBOOK_MODULE_FILE);
    fs::write(&sheet_path, &modules.worksheet_change)?;
    fs::write(&workbook_path, &modules.workbook_before_save)?;
    Ok(vec![sheet_path, workbook_path])
}

/// Check every column literal the modules would reference.
fn verify_references(layout: &Layout) -> Result<()> {
    let mut check = |binding: &str, column: u16| -> Result<()> {
        if layout.is_assigned(column) {
            Ok(())
        } else {
            Err(VbaError::UnassignedColumn {
                binding: binding.to_string(),
                column,
            })
        }
    };
    for pair in &layout.pairs {
        check(&pair.name, pair.individual_column)?;
        check(&pair.name, pair.team_column)?;
        check(&pair.name, pair.count_column)?;
    }
    for link in &layout.links {
        check(&link.name, link.trigger_column)?;
        check(&link.name, link.count_column)?;
    }
    Ok(())
}

/// Render the `Worksheet_Change` module.
fn change_handler(layout: &Layout) -> String {
    let rows = layout.data_rows;
    let mut code = format!(
        "Private Sub Worksheet_Change(ByVal Target As Range)\n\
         \x20   If Target.Count > 1 Then Exit Sub\n\
         \x20   If Target.Row < {first} Or Target.Row > {last} Then Exit Sub\n\
         \n\
         \x20   Dim col As Integer\n\
         \x20   col = Target.Column\n",
        first = rows.first,
        last = rows.last,
    );
    for pair in &layout.pairs {
        code.push('\n');
        code.push_str(&pair_change_fragment(pair));
    }
    for link in &layout.links {
        code.push('\n');
        code.push_str(&link_change_fragment(link));
    }
    code.push_str("\nEnd Sub\n");
    code
}

/// Render the `Workbook_BeforeSave` module.
fn before_save(layout: &Layout) -> String {
    let rows = layout.data_rows;
    let mut code = format!(
        "Private Sub Workbook_BeforeSave(ByVal SaveAsUI As Boolean, Cancel As Boolean)\n\
         \x20   Dim ws As Worksheet\n\
         \x20   Set ws = ThisWorkbook.Sheets(\"{sheet}\")\n\
         \x20   Dim r As Integer\n\
         \x20   Dim err_msg As String\n\
         \x20   Dim ind_val As String, eq_val As String, num_val As Variant\n\
         \x20   Dim part_val As String\n",
        sheet = GRID_SHEET,
    );
    for pair in &layout.pairs {
        code.push('\n');
        code.push_str(&pair_save_fragment(pair, rows));
    }
    for link in &layout.links {
        code.push('\n');
        code.push_str(&link_save_fragment(link, rows));
    }
    code.push_str("\nEnd Sub\n");
    code
}

/// Change-handler fragment for one individual/team pair.
fn pair_change_fragment(pair: &ResolvedPair) -> String {
    format!(
        r#"    If col = {ind} Then
        Application.EnableEvents = False
        If Target.Value = "Sí" Then
            Cells(Target.Row, {team}).Value = "No"
            Cells(Target.Row, {count}).Value = {exact}
        Else
            If Cells(Target.Row, {team}).Value = "No" Then
                Cells(Target.Row, {count}).Value = ""
            End If
        End If
        Application.EnableEvents = True
        Exit Sub
    End If

    If col = {team} Then
        Application.EnableEvents = False
        If Target.Value = "Sí" Then
            Cells(Target.Row, {ind}).Value = "No"
            Cells(Target.Row, {count}).Value = ""
            Cells(Target.Row, {count}).Select
        Else
            If Cells(Target.Row, {ind}).Value = "No" Then
                Cells(Target.Row, {count}).Value = ""
            End If
        End If
        Application.EnableEvents = True
        Exit Sub
    End If
"#,
        ind = pair.individual_column,
        team = pair.team_column,
        count = pair.count_column,
        exact = pair.individual_count,
    )
}

/// Change-handler fragment for one single link.
fn link_change_fragment(link: &ResolvedLink) -> String {
    format!(
        r#"    If col = {trigger} Then
        Application.EnableEvents = False
        If Target.Value = "Sí" Then
            Cells(Target.Row, {count}).Select
        Else
            Cells(Target.Row, {count}).Value = ""
        End If
        Application.EnableEvents = True
        Exit Sub
    End If
"#,
        trigger = link.trigger_column,
        count = link.count_column,
    )
}

/// Pre-save fragment for one individual/team pair: exact count when the
/// individual variant is entered, ranged count for the team variant, and an
/// empty cell otherwise.
fn pair_save_fragment(pair: &ResolvedPair, rows: RowRange) -> String {
    format!(
        r#"    For r = {first} To {last}
        ind_val = ws.Cells(r, {ind}).Value
        eq_val = ws.Cells(r, {team}).Value
        num_val = ws.Cells(r, {count}).Value

        If ind_val = "Sí" Then
            If num_val <> {exact} Then
                err_msg = "Error en Fila " & r & " - Escuela: " & ws.Cells(r, {school}).Value & vbCrLf & _
                          "[{name} - Indiv.] exige exactamente {exact} participante."
                MsgBox err_msg, vbCritical
                ws.Select
                ws.Cells(r, {count}).Value = {exact}
                Cancel = True
                Exit Sub
            End If
        ElseIf eq_val = "Sí" Then
            If IsEmpty(num_val) Or num_val = "" Then
                err_msg = "Error en Fila " & r & " - Escuela: " & ws.Cells(r, {school}).Value & vbCrLf & _
                          "Falta el número de participantes en [{name} - Equipo]"
                MsgBox err_msg, vbCritical
                ws.Select
                ws.Cells(r, {count}).Select
                Cancel = True
                Exit Sub
            ElseIf Not IsNumeric(num_val) Or num_val < {min} Or num_val > {max} Then
                err_msg = "Error en Fila " & r & " - Escuela: " & ws.Cells(r, {school}).Value & vbCrLf & _
                          "[{name} - Equipo] exige entre {min} y {max} participantes."
                MsgBox err_msg, vbCritical
                ws.Select
                ws.Cells(r, {count}).Select
                Cancel = True
                Exit Sub
            End If
        Else
            If Not IsEmpty(num_val) And num_val <> "" Then
                err_msg = "Error en Fila " & r & " - Escuela: " & ws.Cells(r, {school}).Value & vbCrLf & _
                          "Si NO participa en [{name}], el número de participantes debe estar vacío."
                MsgBox err_msg, vbCritical
                ws.Select
                ws.Cells(r, {count}).Value = ""
                Cancel = True
                Exit Sub
            End If
        End If
    Next r
"#,
        first = rows.first,
        last = rows.last,
        ind = pair.individual_column,
        team = pair.team_column,
        count = pair.count_column,
        exact = pair.individual_count,
        min = pair.team_min,
        max = pair.team_max,
        school = SCHOOL_NAME_COL,
        name = pair.name,
    )
}

/// Pre-save fragment for one single link: ranged count when entered,
/// empty cell otherwise.
fn link_save_fragment(link: &ResolvedLink, rows: RowRange) -> String {
    format!(
        r#"    For r = {first} To {last}
        part_val = ws.Cells(r, {trigger}).Value
        num_val = ws.Cells(r, {count}).Value

        If part_val = "Sí" Then
            If IsEmpty(num_val) Or num_val = "" Or Not IsNumeric(num_val) Or num_val < {min} Or num_val > {max} Then
                err_msg = "Error en Fila " & r & " - Escuela: " & ws.Cells(r, {school}).Value & vbCrLf & _
                          "[{name}] exige entre {min} y {max} participantes."
                MsgBox err_msg, vbCritical
                ws.Select
                ws.Cells(r, {count}).Select
                Cancel = True
                Exit Sub
            End If
        Else
            If Not IsEmpty(num_val) And num_val <> "" Then
                err_msg = "Error en Fila " & r & " - Escuela: " & ws.Cells(r, {school}).Value & vbCrLf & _
                          "Si NO participa en [{name}], el número debe estar vacío."
                MsgBox err_msg, vbCritical
                ws.Select
                ws.Cells(r, {count}).Value = ""
                Cancel = True
                Exit Sub
            End If
        End If
    Next r
"#,
        first = rows.first,
        last = rows.last,
        trigger = link.trigger_column,
        count = link.count_column,
        min = link.min,
        max = link.max,
        school = SCHOOL_NAME_COL,
        name = link.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> ResolvedPair {
        ResolvedPair {
            name: "Canto".to_string(),
            individual_column: 8,
            team_column: 9,
            count_column: 10,
            individual_count: 1,
            team_min: 2,
            team_max: 2,
        }
    }

    fn link() -> ResolvedLink {
        ResolvedLink {
            name: "Teatro".to_string(),
            trigger_column: 20,
            count_column: 21,
            min: 1,
            max: 10,
        }
    }

    #[test]
    fn pair_change_fragment_wires_all_three_columns() {
        let fragment = pair_change_fragment(&pair());
        assert!(fragment.contains("If col = 8 Then"));
        assert!(fragment.contains("If col = 9 Then"));
        assert!(fragment.contains("Cells(Target.Row, 10).Value = 1"));
        assert!(fragment.contains("Cells(Target.Row, 9).Value = \"No\""));
        assert!(fragment.contains("Cells(Target.Row, 8).Value = \"No\""));
        // Re-entrancy guard balances on every path.
        assert_eq!(fragment.matches("EnableEvents = False").count(), 2);
        assert_eq!(fragment.matches("EnableEvents = True").count(), 2);
    }

    #[test]
    fn link_change_fragment_moves_focus_on_yes_and_clears_on_no() {
        let fragment = link_change_fragment(&link());
        assert!(fragment.contains("If col = 20 Then"));
        assert!(fragment.contains("Cells(Target.Row, 21).Select"));
        assert!(fragment.contains("Cells(Target.Row, 21).Value = \"\""));
    }

    #[test]
    fn pair_save_fragment_emits_three_way_check() {
        let rows = RowRange { first: 5, last: 22 };
        let fragment = pair_save_fragment(&pair(), rows);
        assert!(fragment.contains("For r = 5 To 22"));
        assert!(fragment.contains("If num_val <> 1 Then"));
        assert!(fragment.contains("num_val < 2 Or num_val > 2"));
        assert!(fragment.contains("debe estar vacío"));
        assert!(fragment.contains("Cancel = True"));
    }

    #[test]
    fn link_save_fragment_uses_link_bounds() {
        let rows = RowRange { first: 5, last: 6 };
        let fragment = link_save_fragment(&link(), rows);
        assert!(fragment.contains("For r = 5 To 6"));
        assert!(fragment.contains("num_val < 1 Or num_val > 10"));
        assert!(fragment.contains("[Teatro] exige entre 1 y 10 participantes."));
    }
}
