//! Static message catalog
//!
//! One entry per message identity, grouped by class. Layout data follows the
//! receiver protocol documentation byte for byte: field order, widths,
//! reserved padding and length-overloaded forms are all significant.
//! Identities without a modeled payload (poll-only or unsupported messages)
//! carry an empty layout list so their frames are still recognized.

use super::{bytes, fixed, i1, i2, i4, pad, r4, r8, u1, u2, u4, variable, Entry};

pub static CATALOG: &[Entry] = &[
    // =========================================================================
    // ACK (0x05) - message acknowledgements
    // =========================================================================
    Entry {
        name: "ACK-ACK",
        class: 0x05,
        id: 0x01,
        layouts: &[fixed(2, &[u1("ClsID"), u1("MsgID")])],
    },
    Entry {
        name: "ACK-NACK",
        class: 0x05,
        id: 0x00,
        layouts: &[fixed(2, &[u1("ClsID"), u1("MsgID")])],
    },
    // =========================================================================
    // AID (0x0b) - assistance data
    // =========================================================================
    Entry {
        name: "AID-ALM",
        class: 0x0b,
        id: 0x30,
        layouts: &[
            fixed(1, &[u1("SVID")]),
            fixed(8, &[u4("SVID"), u4("WEEK")]),
            fixed(
                40,
                &[
                    u4("SVID"),
                    u4("WEEK"),
                    u4("DWRD0"),
                    u4("DWRD1"),
                    u4("DWRD2"),
                    u4("DWRD3"),
                    u4("DWRD4"),
                    u4("DWRD5"),
                    u4("DWRD6"),
                    u4("DWRD7"),
                ],
            ),
        ],
    },
    Entry {
        name: "AID-DATA",
        class: 0x0b,
        id: 0x10,
        layouts: &[fixed(0, &[])],
    },
    Entry {
        name: "AID-EPH",
        class: 0x0b,
        id: 0x31,
        layouts: &[
            fixed(1, &[u1("SVID")]),
            fixed(8, &[u4("SVID"), u4("HOW")]),
            fixed(
                104,
                &[
                    u4("SVID"),
                    u4("HOW"),
                    u4("SF1D0"),
                    u4("SF1D1"),
                    u4("SF1D2"),
                    u4("SF1D3"),
                    u4("SF1D4"),
                    u4("SF1D5"),
                    u4("SF1D6"),
                    u4("SF1D7"),
                    u4("SF2D0"),
                    u4("SF2D1"),
                    u4("SF2D2"),
                    u4("SF2D3"),
                    u4("SF2D4"),
                    u4("SF2D5"),
                    u4("SF2D6"),
                    u4("SF2D7"),
                    u4("SF3D0"),
                    u4("SF3D1"),
                    u4("SF3D2"),
                    u4("SF3D3"),
                    u4("SF3D4"),
                    u4("SF3D5"),
                    u4("SF3D6"),
                    u4("SF3D7"),
                ],
            ),
        ],
    },
    Entry {
        name: "AID-HUI",
        class: 0x0b,
        id: 0x02,
        layouts: &[fixed(
            72,
            &[
                u4("HEALTH"),
                r8("UTC_A1"),
                r8("UTC_A0"),
                i4("UTC_TOT"),
                u2("UTC_WNT"),
                u2("UTC_LS"),
                u2("UTC_WNF"),
                u2("UTC_DN"),
                u2("UTC_LSF"),
                u2("UTC_SPARE"),
                r4("KLOB_A0"),
                r4("KLOB_A1"),
                r4("KLOB_A2"),
                r4("KLOB_A3"),
                r4("KLOB_B0"),
                r4("KLOB_B1"),
                r4("KLOB_B2"),
                r4("KLOB_B3"),
                u4("FLAGS"),
            ],
        )],
    },
    Entry {
        name: "AID-INI",
        class: 0x0b,
        id: 0x01,
        layouts: &[fixed(
            48,
            &[
                i4("X"),
                i4("Y"),
                i4("Z"),
                u4("POSACC"),
                u2("TM_CFG"),
                u2("WN"),
                u4("TOW"),
                i4("TOW_NS"),
                u4("TACC_MS"),
                u4("TACC_NS"),
                i4("CLKD"),
                u4("CLKDACC"),
                u4("FLAGS"),
            ],
        )],
    },
    Entry {
        name: "AID-REQ",
        class: 0x0b,
        id: 0x00,
        layouts: &[],
    },
    // =========================================================================
    // CFG (0x06) - receiver configuration
    // =========================================================================
    Entry {
        name: "CFG-ANT",
        class: 0x06,
        id: 0x13,
        layouts: &[fixed(4, &[u2("flags"), u2("pins")])],
    },
    Entry {
        name: "CFG-CFG",
        class: 0x06,
        id: 0x09,
        layouts: &[fixed(
            12,
            &[u4("clearMask"), u4("saveMask"), u4("loadMask")],
        )],
    },
    Entry {
        name: "CFG-DAT",
        class: 0x06,
        id: 0x06,
        layouts: &[],
    },
    Entry {
        name: "CFG-EKF",
        class: 0x06,
        id: 0x12,
        layouts: &[],
    },
    Entry {
        name: "CFG-FXN",
        class: 0x06,
        id: 0x0e,
        layouts: &[fixed(
            36,
            &[
                u4("flags"),
                u4("t_reacq"),
                u4("t_acq"),
                u4("t_reacq_off"),
                u4("t_acq_off"),
                u4("t_on"),
                u4("t_off"),
                pad(4),
                u4("base_tow"),
            ],
        )],
    },
    Entry {
        name: "CFG-GNSS",
        class: 0x06,
        id: 0x3e,
        layouts: &[variable(
            4,
            &[
                u1("msgVer"),
                u1("numTrkChHw"),
                u1("numTrkChUse"),
                u1("numConfigBlocks"),
            ],
            8,
            &[
                u1("gnssId"),
                u1("resTrkCh"),
                u1("maxTrkCh"),
                u1("reserved1"),
                u4("flags"),
            ],
        )],
    },
    Entry {
        name: "CFG-INF",
        class: 0x06,
        id: 0x02,
        layouts: &[
            fixed(1, &[u1("ProtocolID")]),
            variable(
                0,
                &[],
                10,
                &[
                    u1("ProtocolID"),
                    pad(3),
                    u1("INFMSG_mask0"),
                    u1("INFMSG_mask1"),
                    u1("INFMSG_mask2"),
                    u1("INFMSG_mask3"),
                    u1("INFMSG_mask4"),
                    u1("INFMSG_mask5"),
                ],
            ),
        ],
    },
    Entry {
        name: "CFG-LIC",
        class: 0x06,
        id: 0x80,
        layouts: &[fixed(
            12,
            &[
                u2("lic1"),
                u2("lic2"),
                u2("lic3"),
                u2("lic4"),
                u2("lic5"),
                u2("lic6"),
            ],
        )],
    },
    Entry {
        name: "CFG-MSG",
        class: 0x06,
        id: 0x01,
        layouts: &[
            fixed(2, &[u1("msgClass"), u1("msgId")]),
            variable(2, &[u1("msgClass"), u1("msgId")], 1, &[u1("rate")]),
        ],
    },
    Entry {
        name: "CFG-NAV2",
        class: 0x06,
        id: 0x1a,
        layouts: &[fixed(
            40,
            &[
                u1("Platform"),
                pad(3),
                u1("MinSVInitial"),
                u1("MinSVs"),
                u1("MaxSVs"),
                u1("FixMode"),
                i4("FixedAltitude"),
                u1("MinCN0Initial"),
                u1("MinCN0After"),
                u1("MinELE"),
                u1("DGPSTO"),
                u1("MaxDR"),
                u1("NAVOPT"),
                pad(2),
                u2("PDOP"),
                u2("TDOP"),
                u2("PACC"),
                u2("TACC"),
                u1("StaticThres"),
                pad(11),
            ],
        )],
    },
    Entry {
        name: "CFG-NMEA",
        class: 0x06,
        id: 0x17,
        layouts: &[fixed(
            4,
            &[u1("Filter"), u1("Version"), u1("NumSV"), u1("Flags")],
        )],
    },
    Entry {
        name: "CFG-PRT",
        class: 0x06,
        id: 0x00,
        layouts: &[
            fixed(1, &[u1("PortID")]),
            variable(
                0,
                &[],
                20,
                &[
                    u1("PortID"),
                    pad(3),
                    u4("Mode"),
                    u4("Baudrate"),
                    u2("In_proto_mask"),
                    u2("Out_proto_mask"),
                    u2("Flags"),
                    pad(2),
                ],
            ),
        ],
    },
    Entry {
        name: "CFG-RATE",
        class: 0x06,
        id: 0x08,
        layouts: &[fixed(6, &[u2("Meas"), u2("Nav"), u2("Time")])],
    },
    Entry {
        name: "CFG-RST",
        class: 0x06,
        id: 0x04,
        layouts: &[fixed(4, &[u2("nav_bbr"), u1("Reset"), pad(1)])],
    },
    Entry {
        name: "CFG-RXM",
        class: 0x06,
        id: 0x11,
        layouts: &[fixed(2, &[u1("gps_mode"), u1("lp_mode")])],
    },
    Entry {
        name: "CFG-SBAS",
        class: 0x06,
        id: 0x16,
        layouts: &[fixed(
            8,
            &[
                u1("mode"),
                u1("usage"),
                u1("maxsbas"),
                pad(1),
                u4("scanmode"),
            ],
        )],
    },
    Entry {
        name: "CFG-TM",
        class: 0x06,
        id: 0x10,
        layouts: &[fixed(12, &[u4("INTID"), u4("RATE"), u4("FLAGS")])],
    },
    Entry {
        name: "CFG-TM2",
        class: 0x06,
        id: 0x19,
        layouts: &[
            fixed(1, &[u1("CH")]),
            fixed(12, &[u1("CH"), pad(3), u4("RATE"), u4("FLAGS")]),
        ],
    },
    Entry {
        name: "CFG-TMODE",
        class: 0x06,
        id: 0x1d,
        layouts: &[fixed(
            28,
            &[
                u4("TimeMode"),
                i4("FixedPosX"),
                i4("FixedPosY"),
                i4("FixedPosZ"),
                u4("FixedPosVar"),
                u4("SvinMinDur"),
                u4("SvinVarLimit"),
            ],
        )],
    },
    Entry {
        name: "CFG-TMODE3",
        class: 0x06,
        id: 0x71,
        layouts: &[fixed(
            40,
            &[
                u1("version"),
                u1("reserved1"),
                u2("flags"),
                i4("ecefXOrLat"),
                i4("ecefYOrLon"),
                i4("ecefZOrAlt"),
                i1("ecefXOrLatHP"),
                i1("ecefYOrLonHP"),
                i1("ecefZOrAlHP"),
                u1("reserved2"),
                u4("fixedPosAcc"),
                u4("svinMinDur"),
                u4("svinAccLimit"),
                u2("reserved3_1"),
                u2("reserved3_2"),
                u2("reserved3_3"),
                u2("reserved3_4"),
            ],
        )],
    },
    Entry {
        name: "CFG-TP",
        class: 0x06,
        id: 0x07,
        layouts: &[fixed(
            20,
            &[
                u4("interval"),
                u4("length"),
                i1("status"),
                u1("time_ref"),
                pad(2),
                i2("antenna_cable_delay"),
                i2("RF_group_delay"),
                i4("user_delay"),
            ],
        )],
    },
    Entry {
        name: "CFG-USB",
        class: 0x06,
        id: 0x1b,
        layouts: &[fixed(
            108,
            &[
                u2("VendorID"),
                u2("ProductID"),
                pad(2),
                u2("reserved2"),
                u2("PowerConsumption"),
                u2("Flags"),
                bytes("VendorString", 32),
                bytes("ProductString", 32),
                bytes("SerialNumber", 32),
            ],
        )],
    },
    // =========================================================================
    // INF (0x04) - informational text, one character per repeated block
    // =========================================================================
    Entry {
        name: "INF-DEBUG",
        class: 0x04,
        id: 0x04,
        layouts: &[variable(0, &[], 1, &[u1("Char")])],
    },
    Entry {
        name: "INF-ERROR",
        class: 0x04,
        id: 0x00,
        layouts: &[variable(0, &[], 1, &[u1("Char")])],
    },
    Entry {
        name: "INF-NOTICE",
        class: 0x04,
        id: 0x02,
        layouts: &[variable(0, &[], 1, &[u1("Char")])],
    },
    Entry {
        name: "INF-TEST",
        class: 0x04,
        id: 0x03,
        layouts: &[variable(0, &[], 1, &[u1("Char")])],
    },
    Entry {
        name: "INF-USER",
        class: 0x04,
        id: 0x07,
        layouts: &[variable(0, &[], 1, &[u1("Char")])],
    },
    Entry {
        name: "INF-WARNING",
        class: 0x04,
        id: 0x01,
        layouts: &[variable(0, &[], 1, &[u1("Char")])],
    },
    // =========================================================================
    // MON (0x0a) - receiver monitoring
    // =========================================================================
    Entry {
        name: "MON-EXCEPT",
        class: 0x0a,
        id: 0x05,
        layouts: &[fixed(
            316,
            &[
                u4("code"),
                u4("num"),
                u4("ur0"),
                u4("ur1"),
                u4("ur2"),
                u4("ur3"),
                u4("ur4"),
                u4("ur5"),
                u4("ur6"),
                u4("ur7"),
                u4("ur8"),
                u4("ur9"),
                u4("ur10"),
                u4("ur11"),
                u4("ur12"),
                u4("usp"),
                u4("ulr"),
                u4("fr8"),
                u4("fr9"),
                u4("fr10"),
                u4("fr11"),
                u4("fr12"),
                u4("fsp"),
                u4("flr"),
                u4("fspsr"),
                u4("isp"),
                u4("ilr"),
                u4("ispsr"),
                u4("cpsr"),
                u4("pc"),
                u4("us0"),
                u4("us1"),
                u4("us2"),
                u4("us3"),
                u4("us4"),
                u4("us5"),
                u4("us6"),
                u4("us7"),
                u4("us8"),
                u4("us9"),
                u4("us10"),
                u4("us11"),
                u4("us12"),
                u4("us13"),
                u4("us14"),
                u4("us15"),
                u4("res"),
                u4("is0"),
                u4("is1"),
                u4("is2"),
                u4("is3"),
                u4("is4"),
                u4("is5"),
                u4("is6"),
                u4("is7"),
                u4("is8"),
                u4("is9"),
                u4("is10"),
                u4("is11"),
                u4("is12"),
                u4("is13"),
                u4("is14"),
                u4("is15"),
                u4("fs0"),
                u4("fs1"),
                u4("fs2"),
                u4("fs3"),
                u4("fs4"),
                u4("fs5"),
                u4("fs6"),
                u4("fs7"),
                u4("fs8"),
                u4("fs9"),
                u4("fs10"),
                u4("fs11"),
                u4("fs12"),
                u4("fs13"),
                u4("fs14"),
                u4("fs15"),
            ],
        )],
    },
    Entry {
        name: "MON-HW",
        class: 0x0a,
        id: 0x09,
        layouts: &[fixed(
            72,
            &[
                u4("PinSel"),
                u4("PinBank"),
                u4("PinDir"),
                u4("PinVal"),
                u2("NoisePerMS"),
                u2("AGCCnt"),
                u1("AStatus"),
                u1("APower"),
                u1("flags"),
                pad(1),
                u4("useMask"),
                u1("v0"),
                u1("v1"),
                u1("v2"),
                u1("v3"),
                u1("v4"),
                u1("v5"),
                u1("v6"),
                u1("v7"),
                u1("v8"),
                u1("v9"),
                u1("v10"),
                u1("v11"),
                u1("v12"),
                u1("v13"),
                u1("v14"),
                u1("v15"),
                u1("v16"),
                u1("v17"),
                u1("v18"),
                u1("v19"),
                u1("v20"),
                u1("v21"),
                u1("v22"),
                u1("v23"),
                u1("v24"),
                u1("v25"),
                u1("v26"),
                u1("v27"),
                u1("v28"),
                u1("v29"),
                u1("v30"),
                u1("v31"),
                u4("PinIRQ"),
                pad(8),
            ],
        )],
    },
    Entry {
        name: "MON-IO",
        class: 0x0a,
        id: 0x02,
        layouts: &[],
    },
    Entry {
        name: "MON-IPC",
        class: 0x0a,
        id: 0x03,
        layouts: &[fixed(
            28,
            &[
                u4("HNDLRINST"),
                bytes("LASTEVENT", 16),
                u4("IRQINST"),
                u4("IRQCALL"),
            ],
        )],
    },
    Entry {
        name: "MON-MSGPP",
        class: 0x0a,
        id: 0x06,
        layouts: &[],
    },
    Entry {
        name: "MON-RXBUF",
        class: 0x0a,
        id: 0x07,
        layouts: &[],
    },
    Entry {
        name: "MON-SCHD",
        class: 0x0a,
        id: 0x01,
        layouts: &[fixed(
            24,
            &[
                u4("TSKRUN"),
                u4("TSKSCHD"),
                u4("TSKOVRR"),
                u4("TSKREG"),
                u2("STACK"),
                u2("STACKSIZE"),
                u2("CPUIDLE"),
                u1("FLYSLY"),
                u1("PTLSLY"),
            ],
        )],
    },
    Entry {
        name: "MON-TXBUF",
        class: 0x0a,
        id: 0x08,
        layouts: &[],
    },
    Entry {
        name: "MON-USB",
        class: 0x0a,
        id: 0x0a,
        layouts: &[],
    },
    Entry {
        name: "MON-VER",
        class: 0x0a,
        id: 0x04,
        layouts: &[fixed(
            40,
            &[bytes("SWVersion", 30), bytes("HWVersion", 10)],
        )],
    },
    // =========================================================================
    // NAV (0x01) - navigation solutions
    // =========================================================================
    Entry {
        name: "NAV-CLOCK",
        class: 0x01,
        id: 0x22,
        layouts: &[fixed(
            20,
            &[u4("ITOW"), i4("CLKB"), i4("CLKD"), u4("TAcc"), u4("FAcc")],
        )],
    },
    Entry {
        name: "NAV-DGPS",
        class: 0x01,
        id: 0x31,
        layouts: &[variable(
            16,
            &[
                u4("ITOW"),
                i4("AGE"),
                i2("BASEID"),
                i2("BASEHLTH"),
                u1("NCH"),
                u1("STATUS"),
                pad(2),
            ],
            12,
            &[
                u1("SVID"),
                u1("Flags"),
                u2("AGECH"),
                r4("PRC"),
                r4("PRRC"),
            ],
        )],
    },
    Entry {
        name: "NAV-DOP",
        class: 0x01,
        id: 0x04,
        layouts: &[fixed(
            18,
            &[
                u4("ITOW"),
                u2("GDOP"),
                u2("PDOP"),
                u2("TDOP"),
                u2("VDOP"),
                u2("HDOP"),
                u2("NDOP"),
                u2("EDOP"),
            ],
        )],
    },
    Entry {
        name: "NAV-EKFSTATUS",
        class: 0x01,
        id: 0x40,
        layouts: &[fixed(
            36,
            &[
                i4("pulses"),
                i4("period"),
                u4("gyromean"),
                i2("temp"),
                i1("dir"),
                i1("calib"),
                i4("pulse"),
                i4("gbias"),
                i4("gscale"),
                i2("accps"),
                i2("accgb"),
                i2("accgs"),
                i1("used"),
                u1("res"),
            ],
        )],
    },
    Entry {
        name: "NAV-POSECEF",
        class: 0x01,
        id: 0x01,
        layouts: &[fixed(
            20,
            &[
                u4("ITOW"),
                i4("ECEF_X"),
                i4("ECEF_Y"),
                i4("ECEF_Z"),
                u4("Pacc"),
            ],
        )],
    },
    Entry {
        name: "NAV-POSLLH",
        class: 0x01,
        id: 0x02,
        layouts: &[fixed(
            28,
            &[
                u4("ITOW"),
                i4("LON"),
                i4("LAT"),
                i4("HEIGHT"),
                i4("HMSL"),
                u4("Hacc"),
                u4("Vacc"),
            ],
        )],
    },
    Entry {
        name: "NAV-POSUTM",
        class: 0x01,
        id: 0x08,
        layouts: &[fixed(
            18,
            &[
                u4("ITOW"),
                i4("EAST"),
                i4("NORTH"),
                i4("ALT"),
                i1("ZONE"),
                i1("HEM"),
            ],
        )],
    },
    Entry {
        name: "NAV-SBAS",
        class: 0x01,
        id: 0x32,
        layouts: &[variable(
            12,
            &[
                u4("ITOW"),
                u1("GEO"),
                u1("MODE"),
                i1("SYS"),
                u1("SERVICE"),
                u1("CNT"),
                pad(3),
            ],
            12,
            &[
                u1("SVID"),
                u1("FLAGS"),
                u1("UDRE"),
                u1("SYSn"),
                u1("SERVICEn"),
                pad(1),
                i2("PRC"),
                pad(2),
                i2("IC"),
            ],
        )],
    },
    Entry {
        name: "NAV-SOL",
        class: 0x01,
        id: 0x06,
        layouts: &[fixed(
            52,
            &[
                u4("ITOW"),
                i4("Frac"),
                i2("week"),
                u1("GPSFix"),
                u1("Flags"),
                i4("ECEF_X"),
                i4("ECEF_Y"),
                i4("ECEF_Z"),
                u4("Pacc"),
                i4("ECEFVX"),
                i4("ECEFVY"),
                i4("ECEFVZ"),
                u4("SAcc"),
                u2("PDOP"),
                pad(1),
                u1("numSV"),
                pad(4),
            ],
        )],
    },
    Entry {
        name: "NAV-STATUS",
        class: 0x01,
        id: 0x03,
        layouts: &[fixed(
            16,
            &[
                u4("ITOW"),
                u1("GPSfix"),
                u1("Flags"),
                u1("DiffS"),
                pad(1),
                u4("TTFF"),
                u4("MSSS"),
            ],
        )],
    },
    Entry {
        name: "NAV-SVIN",
        class: 0x01,
        id: 0x3b,
        layouts: &[fixed(
            40,
            &[
                u1("version"),
                u1("reserved1"),
                u1("reserved1_1"),
                u1("reserved1_2"),
                u4("iTOW"),
                u4("dur"),
                i4("meanX"),
                i4("meanY"),
                i4("meanZ"),
                i1("meanXHP"),
                i1("meanYHP"),
                i1("meanZHP"),
                u1("reserved2"),
                u4("meanAcc"),
                u4("obs"),
                u1("valid"),
                u1("active"),
                u1("reserved3"),
                u1("reserved3_2"),
            ],
        )],
    },
    Entry {
        name: "NAV-SVINFO",
        class: 0x01,
        id: 0x30,
        layouts: &[variable(
            8,
            &[u4("ITOW"), u1("NCH"), pad(3)],
            12,
            &[
                u1("chn"),
                u1("SVID"),
                u1("Flags"),
                i1("QI"),
                u1("CNO"),
                i1("Elev"),
                i2("Azim"),
                i4("PRRes"),
            ],
        )],
    },
    Entry {
        name: "NAV-TIMEGPS",
        class: 0x01,
        id: 0x20,
        layouts: &[fixed(
            16,
            &[
                u4("ITOW"),
                i4("Frac"),
                i2("week"),
                i1("LeapS"),
                u1("Valid"),
                u4("TAcc"),
            ],
        )],
    },
    Entry {
        name: "NAV-TIMEUTC",
        class: 0x01,
        id: 0x21,
        layouts: &[fixed(
            20,
            &[
                u4("ITOW"),
                u4("TAcc"),
                i4("Nano"),
                u2("Year"),
                u1("Month"),
                u1("Day"),
                u1("Hour"),
                u1("Min"),
                u1("Sec"),
                u1("Valid"),
            ],
        )],
    },
    Entry {
        name: "NAV-VELECEF",
        class: 0x01,
        id: 0x11,
        layouts: &[fixed(
            20,
            &[
                u4("ITOW"),
                i4("ECEFVX"),
                i4("ECEFVY"),
                i4("ECEFVZ"),
                u4("SAcc"),
            ],
        )],
    },
    Entry {
        name: "NAV-VELNED",
        class: 0x01,
        id: 0x12,
        layouts: &[fixed(
            36,
            &[
                u4("ITOW"),
                i4("VEL_N"),
                i4("VEL_E"),
                i4("VEL_D"),
                u4("Speed"),
                u4("GSpeed"),
                i4("Heading"),
                u4("SAcc"),
                u4("CAcc"),
            ],
        )],
    },
    // =========================================================================
    // RXM (0x02) - receiver manager
    // =========================================================================
    Entry {
        name: "RXM-ALM",
        class: 0x02,
        id: 0x30,
        layouts: &[
            fixed(1, &[u1("SVID")]),
            fixed(8, &[u4("SVID"), u4("WEEK")]),
            fixed(
                40,
                &[
                    u4("SVID"),
                    u4("WEEK"),
                    u4("DWRD0"),
                    u4("DWRD1"),
                    u4("DWRD2"),
                    u4("DWRD3"),
                    u4("DWRD4"),
                    u4("DWRD5"),
                    u4("DWRD6"),
                    u4("DWRD7"),
                ],
            ),
        ],
    },
    Entry {
        name: "RXM-EPH",
        class: 0x02,
        id: 0x31,
        layouts: &[
            fixed(1, &[u1("SVID")]),
            fixed(8, &[u4("SVID"), u4("HOW")]),
            fixed(
                104,
                &[
                    u4("SVID"),
                    u4("HOW"),
                    u4("SF1D0"),
                    u4("SF1D1"),
                    u4("SF1D2"),
                    u4("SF1D3"),
                    u4("SF1D4"),
                    u4("SF1D5"),
                    u4("SF1D6"),
                    u4("SF1D7"),
                    u4("SF2D0"),
                    u4("SF2D1"),
                    u4("SF2D2"),
                    u4("SF2D3"),
                    u4("SF2D4"),
                    u4("SF2D5"),
                    u4("SF2D6"),
                    u4("SF2D7"),
                    u4("SF3D0"),
                    u4("SF3D1"),
                    u4("SF3D2"),
                    u4("SF3D3"),
                    u4("SF3D4"),
                    u4("SF3D5"),
                    u4("SF3D6"),
                    u4("SF3D7"),
                ],
            ),
        ],
    },
    Entry {
        name: "RXM-POSREQ",
        class: 0x02,
        id: 0x40,
        layouts: &[],
    },
    Entry {
        name: "RXM-RAW",
        class: 0x02,
        id: 0x10,
        layouts: &[variable(
            8,
            &[i4("ITOW"), i2("Week"), u1("NSV"), pad(1)],
            24,
            &[
                r8("CPMes"),
                r8("PRMes"),
                r4("DOMes"),
                u1("SV"),
                i1("MesQI"),
                i1("CNO"),
                u1("LLI"),
            ],
        )],
    },
    Entry {
        name: "RXM-SFRB",
        class: 0x02,
        id: 0x11,
        layouts: &[fixed(
            42,
            &[
                u1("CHN"),
                u1("SVID"),
                i4("DWRD0"),
                i4("DWRD1"),
                i4("DWRD2"),
                i4("DWRD3"),
                i4("DWRD4"),
                i4("DWRD5"),
                i4("DWRD6"),
                i4("DWRD7"),
                i4("DWRD8"),
                i4("DWRD9"),
            ],
        )],
    },
    Entry {
        name: "RXM-SVSI",
        class: 0x02,
        id: 0x20,
        layouts: &[variable(
            8,
            &[i4("ITOW"), i2("Week"), u1("NumVis"), u1("NumSv")],
            6,
            &[
                u1("SVID"),
                u1("SVFlag"),
                i2("Azim"),
                i1("Elev"),
                u1("Age"),
            ],
        )],
    },
    // =========================================================================
    // TIM (0x0d) - timekeeping (identities only, payloads not modeled)
    // =========================================================================
    Entry {
        name: "TIM-SVIN",
        class: 0x0d,
        id: 0x04,
        layouts: &[],
    },
    Entry {
        name: "TIM-TM",
        class: 0x0d,
        id: 0x02,
        layouts: &[],
    },
    Entry {
        name: "TIM-TM2",
        class: 0x0d,
        id: 0x03,
        layouts: &[],
    },
    Entry {
        name: "TIM-TP",
        class: 0x0d,
        id: 0x01,
        layouts: &[],
    },
    // =========================================================================
    // UPD (0x09) - low-level memory manipulation
    // =========================================================================
    Entry {
        name: "UPD-DOWNL",
        class: 0x09,
        id: 0x01,
        layouts: &[
            fixed(8, &[u4("StartAddr"), u4("Flags")]),
            fixed(9, &[u4("StartAddr"), u4("Flags"), u1("B0")]),
        ],
    },
    Entry {
        name: "UPD-EXEC",
        class: 0x09,
        id: 0x03,
        layouts: &[],
    },
    Entry {
        name: "UPD-MEMCPY",
        class: 0x09,
        id: 0x04,
        layouts: &[],
    },
    Entry {
        name: "UPD-UPLOAD",
        class: 0x09,
        id: 0x02,
        layouts: &[
            fixed(
                13,
                &[u4("StartAddr"), u4("DataSize"), u4("Flags"), u1("B0")],
            ),
            fixed(
                28,
                &[
                    u4("StartAddr"),
                    u4("DataSize"),
                    u4("Flags"),
                    u1("B0"),
                    u1("B1"),
                    u1("B2"),
                    u1("B3"),
                    u1("B4"),
                    u1("B5"),
                    u1("B6"),
                    u1("B7"),
                    u1("B8"),
                    u1("B9"),
                    u1("B10"),
                    u1("B11"),
                    u1("B12"),
                    u1("B13"),
                    u1("B14"),
                    u1("B15"),
                ],
            ),
        ],
    },
];
