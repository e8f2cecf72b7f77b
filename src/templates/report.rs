// src/templates/report.rs
//
// Styled offload report, one document per manifest. Consumes what the
// pipeline computed (shift, change status) and derives nothing itself
// beyond the display totals.

use chrono::NaiveDateTime;
use maud::{html, Markup, DOCTYPE};

use crate::normalize;
use crate::pipeline::ProcessedManifest;

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

pub fn offload_report(processed: &ProcessedManifest, generated_at: NaiveDateTime) -> Markup {
    let manifest = &processed.manifest;
    let total_pieces = manifest.total_pieces();
    let total_weight = manifest.total_weight_kg();
    let iso_date = normalize::normalize_date_token(&manifest.date, generated_at.date());

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Offload Report — " (or_dash(&manifest.flight)) }
            }
            body style="margin:0;background:#eef1f7;font-family:Calibri,Arial,sans-serif;" {
                div style="max-width:700px;margin:20px auto;background:#fff;border:1px solid #d0d5e8;" {
                    div style="background:#0b3a78;padding:18px 22px;border-left:6px solid #c0392b;" {
                        div style="font-size:18px;font-weight:700;color:#fff;" {
                            "Cargo Offload Notification"
                        }
                        div style="font-size:13px;color:#a8c4f0;margin-top:4px;" {
                            "Flight: " strong style="color:#d4e6ff;" { (or_dash(&manifest.flight)) }
                            "  |  Date: " strong style="color:#d4e6ff;" { (or_dash(&manifest.date)) }
                            @if let Some(date) = iso_date {
                                " (" (date.format("%Y-%m-%d")) ")"
                            }
                            "  |  Destination: " strong style="color:#d4e6ff;" { (or_dash(&manifest.destination)) }
                        }
                        div style="font-size:11px;color:#6b9fd4;margin-top:4px;" {
                            (processed.shift.label())
                            " — " (processed.change.label())
                            " (update #" (processed.state.update_count) ")"
                        }
                    }

                    div style="padding:14px 24px;" {
                        table style="width:100%;border:1px solid #e0e7f5;border-collapse:collapse;" {
                            tr {
                                td style="width:33%;padding:14px;border-right:1px solid #e0e7f5;background:#f5f8ff;" {
                                    div style="font-size:11px;color:#6b7280;" { "FLIGHT" }
                                    div style="font-size:22px;font-weight:700;color:#0b3a78;" { (or_dash(&manifest.flight)) }
                                }
                                td style="width:33%;padding:14px;border-right:1px solid #e0e7f5;background:#fff5f5;" {
                                    div style="font-size:11px;color:#6b7280;" { "TOTAL PIECES" }
                                    div style="font-size:22px;font-weight:700;color:#c0392b;" { (total_pieces) " PCS" }
                                }
                                td style="width:33%;padding:14px;background:#fff5f5;" {
                                    div style="font-size:11px;color:#6b7280;" { "TOTAL WEIGHT" }
                                    div style="font-size:22px;font-weight:700;color:#c0392b;" { (format!("{total_weight:.0}")) " KGS" }
                                }
                            }
                        }
                    }

                    div style="padding:0 24px 14px 24px;" {
                        div style="padding:6px 10px;background:#fdf2f2;border-left:4px solid #c0392b;" {
                            span style="font-size:12px;font-weight:700;color:#c0392b;letter-spacing:1px;" {
                                "OFFLOADED SHIPMENTS — " (manifest.shipments.len()) " AWB(s)"
                            }
                        }
                        table style="width:100%;margin-top:10px;border-collapse:collapse;font-size:12px;" {
                            tr style="background:#0b3a78;color:#fff;font-weight:700;" {
                                td style="padding:8px 6px;border:1px solid #0a3166;" { "#" }
                                td style="padding:8px 6px;border:1px solid #0a3166;" { "AWB" }
                                td style="padding:8px 6px;border:1px solid #0a3166;" { "PCS" }
                                td style="padding:8px 6px;border:1px solid #0a3166;" { "KGS" }
                                td style="padding:8px 6px;border:1px solid #0a3166;" { "Description" }
                                td style="padding:8px 6px;border:1px solid #0a3166;" { "Reason" }
                                td style="padding:8px 6px;border:1px solid #0a3166;" { "ULD" }
                            }
                            @for (i, shipment) in manifest.shipments.iter().enumerate() {
                                tr style=(if i % 2 == 0 { "background:#f0f5ff;" } else { "background:#ffffff;" }) {
                                    td style="padding:9px 6px;border:1px solid #d0d9ee;font-weight:700;" { (i + 1) }
                                    td style="padding:9px 6px;border:1px solid #d0d9ee;font-family:Courier New,monospace;font-size:11px;" { (shipment.awb) }
                                    td style="padding:9px 6px;border:1px solid #d0d9ee;" { (shipment.pieces) }
                                    td style="padding:9px 6px;border:1px solid #d0d9ee;" { (shipment.weight) }
                                    td style="padding:9px 6px;border:1px solid #d0d9ee;" { (shipment.description) }
                                    td style="padding:9px 6px;border:1px solid #d0d9ee;color:#c0392b;font-weight:700;" { (shipment.reason) }
                                    td style="padding:9px 6px;border:1px solid #d0d9ee;" { (shipment.uld) }
                                }
                            }
                            tr style="background:#1b2a4a;color:#ffd700;font-weight:700;" {
                                td colspan="2" style="padding:9px 6px;border:1px solid #0a3166;color:#fff;" { "TOTAL" }
                                td style="padding:9px 6px;border:1px solid #0a3166;" { (total_pieces) }
                                td style="padding:9px 6px;border:1px solid #0a3166;" { (format!("{total_weight:.0}")) }
                                td colspan="3" style="padding:9px 6px;border:1px solid #0a3166;" { }
                            }
                        }
                    }

                    div style="padding:12px 24px;background:#f8faff;border-top:2px solid #0b3a78;font-size:11px;color:#8a9ab5;" {
                        "Auto-generated " (generated_at.format("%d %b %Y %H:%M"))
                    }
                }
            }
        }
    }
}
